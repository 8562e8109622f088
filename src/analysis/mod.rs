/// Analysis layer: the pure regression pipeline.
///
/// `pipeline::analyze` turns a [`crate::data::model::Dataset`] plus two
/// column names into derived series, a fitted line, and a verdict;
/// `regression` holds the closed-form OLS routine it builds on.

pub mod pipeline;
pub mod regression;
