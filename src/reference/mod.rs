//! Image reference classification and rewriting
//!
//! This module implements the name translation between podman's
//! implicit-registry convention and docker's fully-qualified storage form.
//! Podman resolves an unqualified name like `nginx:latest` against its
//! registry search list, while docker always stores the expanded
//! `docker.io/library/nginx:latest`. The functions here answer structural
//! questions about a reference string (does it carry a tag, does its first
//! segment look like a registry) and derive the name each tool would use.
//!
//! Every function is a total, pure string transform: malformed input is
//! treated as already-canonical and returned unchanged rather than rejected,
//! so a naming pipeline never halts on a free-form reference.

/// Registry that docker substitutes for unqualified references.
pub const DOCKER_IO: &str = "docker.io";

/// Registry plus the default namespace used for single-segment names.
pub const DOCKER_IO_LIBRARY: &str = "docker.io/library";

/// Returns true if the reference carries an explicit `:tag` suffix.
///
/// Matches any `:` past the first byte, so a port in the registry segment
/// (`registry.example.com:5000/repo`) also counts as a tag. Callers that
/// hand over `host:port` references without a tag get a false positive.
pub fn has_tag(image: &str) -> bool {
    image.find(':').is_some_and(|i| i > 0)
}

/// Returns true if the reference contains a namespace or registry segment,
/// i.e. a `/` past the first byte.
pub fn has_namespace(image: &str) -> bool {
    image.find('/').is_some_and(|i| i > 0)
}

/// Naively checks whether the leading segment looks like a registry domain:
/// it must contain an interior `.` and must not end with one.
pub fn is_registry_domain(image: &str) -> bool {
    if !has_namespace(image) {
        return false;
    }
    let registry = image.split('/').next().unwrap_or_default();
    registry.find('.').is_some_and(|i| i > 0) && !registry.ends_with('.')
}

/// Returns true if the leading segment is exactly `localhost`.
pub fn is_registry_localhost(image: &str) -> bool {
    if !has_namespace(image) {
        return false;
    }
    image.split('/').next() == Some("localhost")
}

/// A reference is fully qualified when it both carries an explicit tag and
/// has a domain-shaped registry. Untagged references are never fully
/// qualified, whatever their registry looks like.
pub fn is_fully_qualified(image: &str) -> bool {
    has_tag(image) && is_registry_domain(image)
}

/// Joins an image name with a tag. If `tag` is itself a complete reference
/// (it already carries a `:tag`), it wins outright and is returned
/// unchanged, which makes the join idempotent for override references.
pub fn full_image_name(image: &str, tag: &str) -> String {
    if has_tag(tag) {
        return tag.to_string();
    }
    format!("{}:{}", image, tag)
}

/// Strips a leading registry (and namespace, for domain registries) to
/// yield the minimal `repository[:tag]` form.
///
/// Ordered rules, first match wins:
/// 1. at most 2 segments with a localhost or domain registry: drop the
///    first segment
/// 2. at most 2 segments otherwise: unchanged (`namespace/repo` with no
///    registry is already minimal)
/// 3. localhost registry: drop the first segment
/// 4. domain registry: drop the first two segments (registry + namespace)
/// 5. anything else: unchanged
pub fn short_image_name(image: &str) -> String {
    let parts: Vec<&str> = image.split('/').collect();

    if parts.len() <= 2 {
        if is_registry_localhost(image) || is_registry_domain(image) {
            return parts[1..].join("/");
        }
        return image.to_string();
    }
    if is_registry_localhost(image) {
        return parts[1..].join("/");
    }
    if is_registry_domain(image) {
        return parts[2..].join("/");
    }
    image.to_string()
}

/// Rewrites a reference into the name docker stores it under.
///
/// Docker does not keep a `localhost/` prefix, so that registry is stripped
/// first. A fully qualified `registry/image:tag` is already canonical. An
/// unqualified single-segment `image:tag` becomes
/// `docker.io/library/image:tag`; a `namespace/image:tag` becomes
/// `docker.io/namespace/image:tag`.
pub fn full_docker_image_name(image: &str) -> String {
    let sanitized = if is_registry_localhost(image) {
        short_image_name(image)
    } else {
        image.to_string()
    };

    if is_fully_qualified(&sanitized) {
        return sanitized;
    }
    if sanitized.split('/').count() == 1 {
        return format!("{}/{}", DOCKER_IO_LIBRARY, sanitized);
    }
    format!("{}/{}", DOCKER_IO, sanitized)
}
