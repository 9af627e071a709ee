//! Generation request: types, validation, and file loading

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::load_config;
pub use model::{
    default_columns, AnimationConfig, Architecture, Column, ColumnType, DataFetching, Filter,
    FilterType, GeneratorConfig, Intensity,
};
pub use validate::ValidConfig;
