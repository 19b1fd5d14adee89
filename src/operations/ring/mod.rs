mod normalize_ring;

pub use normalize_ring::NormalizeRing;
