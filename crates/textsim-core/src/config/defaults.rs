/// Vocabulary size at and above which the cosine accumulation fans out
/// over rayon workers. Below it a sequential fold is used.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;
