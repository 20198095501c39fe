pub mod leadgen;
pub mod replies;
