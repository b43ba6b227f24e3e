use std::ffi::OsStr;
use std::fs::File;

use justconfig::item::ValueExtractor;
use justconfig::processors::Trim;
use justconfig::sources::env::Env;
use justconfig::sources::text::ConfigText;
use justconfig::ConfPath;
use justconfig::Config;

use crate::config_processors::Unquote;

// Set some default values
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_CATALOG_PATH: &str = "data/courses.bin";
const DEFAULT_SIMILARITY_PATH: &str = "data/similarity.bin";
const DEFAULT_NUM_ITEMS_TO_RECOMMEND: usize = 6;

pub struct AppConfig {
    pub log: LogConfig,
    pub data: DataConfig,
    pub model: ModelConfig,
}

pub struct LogConfig {
    pub level: String,
}

pub struct DataConfig {
    pub catalog_path: String,
    pub similarity_path: String,
}

pub struct ModelConfig {
    pub num_items_to_recommend: usize,
}

impl AppConfig {
    pub fn new(config_path: String) -> AppConfig {
        // Initialize config object
        let mut conf = Config::default();

        // Check if there is a config file
        if let Ok(config_file) = File::open(&config_path) {
            let config_text = ConfigText::new(config_file, &config_path)
                .expect("Loading configuration file failed.");
            conf.add_source(config_text);
        }

        // Define config params from environment variables
        let config_env = Env::new(&[
            (
                ConfPath::from(&["data", "catalog_path"]),
                OsStr::new("CATALOG_DATA"),
            ),
            (
                ConfPath::from(&["data", "similarity_path"]),
                OsStr::new("SIMILARITY_DATA"),
            ),
        ]);
        conf.add_source(config_env);

        // Parse into custom config struct
        AppConfig::parse(conf)
    }

    fn parse(conf: justconfig::Config) -> AppConfig {
        AppConfig {
            log: LogConfig::parse(&conf, ConfPath::from(&["log"])),
            data: DataConfig::parse(&conf, ConfPath::from(&["data"])),
            model: ModelConfig::parse(&conf, ConfPath::from(&["model"])),
        }
    }
}

impl LogConfig {
    fn parse(conf: &Config, path: ConfPath) -> LogConfig {
        LogConfig {
            level: conf
                .get(path.push("level"))
                .unquote()
                .value()
                .unwrap_or_else(|_| String::from(DEFAULT_LOG_LEVEL)),
        }
    }
}

impl DataConfig {
    fn parse(conf: &Config, path: ConfPath) -> DataConfig {
        DataConfig {
            catalog_path: conf
                .get(path.push("catalog_path"))
                .unquote()
                .value()
                .unwrap_or_else(|_| String::from(DEFAULT_CATALOG_PATH)),
            similarity_path: conf
                .get(path.push("similarity_path"))
                .unquote()
                .value()
                .unwrap_or_else(|_| String::from(DEFAULT_SIMILARITY_PATH)),
        }
    }
}

impl ModelConfig {
    fn parse(conf: &Config, path: ConfPath) -> ModelConfig {
        ModelConfig {
            num_items_to_recommend: conf
                .get(path.push("num_items_to_recommend"))
                .trim()
                .value()
                .unwrap_or(DEFAULT_NUM_ITEMS_TO_RECOMMEND),
        }
    }
}

#[cfg(test)]
mod config_test {
    use super::*;

    #[test]
    fn should_fall_back_to_defaults_without_a_config_file() {
        let config = AppConfig::new(String::new());

        assert_eq!("data/courses.bin", config.data.catalog_path);
        assert_eq!("data/similarity.bin", config.data.similarity_path);
        assert_eq!(6, config.model.num_items_to_recommend);
        assert_eq!("info", config.log.level);
    }
}
