mod settings;

pub use settings::{EventsConfig, ServerConfig, Settings, StoreConfig};
