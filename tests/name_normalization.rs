use podman_docker_names::logging::Logger;
use podman_docker_names::storage::{parse_storage_driver, storage_conf_paths, HostInspector};
use podman_docker_names::{
    full_docker_image_name, full_image_name, is_fully_qualified, short_image_name,
};
use std::path::PathBuf;

#[test]
fn test_build_pipeline_naming_flow() {
    // a build produces a bare name plus tags; the recorded name must be the
    // one docker would store
    let built = full_image_name("myapp", "v1");
    assert_eq!(built, "myapp:v1");
    assert!(!is_fully_qualified(&built));
    assert_eq!(full_docker_image_name(&built), "docker.io/library/myapp:v1");

    // pushing to an explicit registry leaves the name alone
    let pushed = full_image_name("myapp", "quay.io/org/myapp:v1");
    assert_eq!(pushed, "quay.io/org/myapp:v1");
    assert!(is_fully_qualified(&pushed));
    assert_eq!(full_docker_image_name(&pushed), pushed);
}

#[test]
fn test_podman_localhost_images_map_to_docker() {
    // podman lists locally built images under localhost/; docker never does
    let local = "localhost/myapp:v1";
    assert_eq!(short_image_name(local), "myapp:v1");
    assert_eq!(full_docker_image_name(local), "docker.io/library/myapp:v1");
}

#[test]
fn test_short_name_strips_inserted_default_registry() {
    let normalized = full_docker_image_name("org/myapp:v1");
    assert_eq!(normalized, "docker.io/org/myapp:v1");
    assert_eq!(short_image_name(&normalized), "myapp:v1");
}

#[test]
fn test_storage_conf_candidates_and_parse() {
    let paths = storage_conf_paths(Some(PathBuf::from("/home/user/.config")));
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0], PathBuf::from("/etc/containers/storage.conf"));
    assert_eq!(
        paths[1],
        PathBuf::from("/home/user/.config/containers/storage.conf")
    );

    let conf = "[storage]\ndriver = \"overlay\"\ngraphroot = \"/var/lib/containers/storage\"\n";
    assert_eq!(parse_storage_driver(conf), Some("overlay".to_string()));
}

#[test]
fn test_inspector_defaults_when_host_has_no_config() {
    let inspector = HostInspector::new(Logger::new_quiet());
    let missing = vec![PathBuf::from("/definitely/not/here/storage.conf")];
    assert_eq!(inspector.find_storage_driver(&missing), "");
    assert!(!inspector.is_storage_driver_overlay(&missing));
}
