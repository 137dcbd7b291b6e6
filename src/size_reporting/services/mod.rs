mod size_ranker;

pub use size_ranker::SizeRanker;
