//! Runner orchestrating subcommands over the library

use crate::cli::args::{Args, Command};
use crate::error::{NamesError, Result};
use crate::logging::Logger;
use crate::reference;
use crate::storage::{storage_conf_paths, HostInspector, FUSE_OVERLAYFS};
use std::path::PathBuf;

pub struct Runner {
    args: Args,
    logger: Logger,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        let logger = if args.quiet {
            Logger::new_quiet()
        } else {
            Logger::new(args.verbose)
        };
        Self { args, logger }
    }

    pub fn run(&self) -> Result<()> {
        match &self.args.command {
            Command::Normalize { image, tag } => self.normalize(image, tag.as_deref()),
            Command::ShortName { image } => self.short_name(image),
            Command::Classify { image } => self.classify(image),
            Command::Inspect => self.inspect(),
        }
    }

    fn validate_image(&self, image: &str) -> Result<()> {
        if image.is_empty() {
            return Err(NamesError::Validation(
                "Image reference cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn normalize(&self, image: &str, tag: Option<&str>) -> Result<()> {
        self.validate_image(image)?;

        let joined = match tag {
            Some(tag) => reference::full_image_name(image, tag),
            None => image.to_string(),
        };
        if joined != image {
            self.logger
                .detail(&format!("Joined reference: {}", joined));
        }

        println!("{}", reference::full_docker_image_name(&joined));
        Ok(())
    }

    fn short_name(&self, image: &str) -> Result<()> {
        self.validate_image(image)?;
        println!("{}", reference::short_image_name(image));
        Ok(())
    }

    fn classify(&self, image: &str) -> Result<()> {
        self.validate_image(image)?;

        let items = [
            ("Has tag", reference::has_tag(image).to_string()),
            ("Has namespace", reference::has_namespace(image).to_string()),
            (
                "Registry is a domain",
                reference::is_registry_domain(image).to_string(),
            ),
            (
                "Registry is localhost",
                reference::is_registry_localhost(image).to_string(),
            ),
            (
                "Fully qualified",
                reference::is_fully_qualified(image).to_string(),
            ),
        ];
        self.logger.summary_kv(image, &items);
        Ok(())
    }

    fn inspect(&self) -> Result<()> {
        let inspector = HostInspector::new(self.logger.clone());
        let paths = storage_conf_paths(std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from));

        let driver = inspector.find_storage_driver(&paths);
        if driver.is_empty() {
            self.logger.warning("No storage driver configured");
        } else {
            self.logger
                .info(&format!("Storage driver: {}", driver));
        }

        match inspector.find_fuse_overlayfs() {
            Some(path) => self
                .logger
                .info(&format!("{}: {}", FUSE_OVERLAYFS, path.display())),
            None => self
                .logger
                .info(&format!("{}: not found", FUSE_OVERLAYFS)),
        }
        Ok(())
    }
}
