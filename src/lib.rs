//! Podman/Docker Image Names Library
//!
//! This file serves as the library root for the podman-docker-names crate,
//! organizing and exposing the modules that make up the tool: image
//! reference classification and rewriting, host storage inspection, and the
//! CLI surface.

pub mod cli;
pub mod common;
pub mod error;
pub mod logging;
pub mod reference;
pub mod storage;

pub use error::{NamesError, Result};
pub use logging::Logger;
pub use reference::{
    full_docker_image_name, full_image_name, has_namespace, has_tag, is_fully_qualified,
    is_registry_domain, is_registry_localhost, short_image_name, DOCKER_IO, DOCKER_IO_LIBRARY,
};
pub use storage::HostInspector;
