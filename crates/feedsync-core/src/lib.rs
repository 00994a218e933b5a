pub mod app_config;
pub mod catalog;
pub mod config;
pub mod feed;
pub mod profile;

pub use app_config::AppConfig;
pub use catalog::{
    CreatedProduct, NewProduct, NewVariant, ProductImage, ProductOption, RemoteProduct,
    RemoteProductIndex, RemoteVariant, VariantRef, VariantUpdate,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use feed::{ColorParams, ExtraImages, FeedRow, JsonCell};
pub use profile::{
    load_profile, parse_profile, ColorFallback, DescriptionTemplate, FeedEncoding, ModelBaseStrategy,
    ReconcileMode, SyncProfile, TaxOrder,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read sync profile {path}: {source}")]
    ProfileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse sync profile: {0}")]
    ProfileParse(#[from] serde_yaml::Error),

    #[error("invalid sync profile: {0}")]
    Validation(String),
}
