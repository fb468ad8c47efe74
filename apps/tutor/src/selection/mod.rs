// Multi-shot example selection: weighted relevance scoring and top-K ranking.

pub mod scoring;
pub mod selector;
