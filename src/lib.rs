pub mod app;
pub mod builder;
pub mod data;
pub mod evaluator;
pub mod feedback;
pub mod model;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
