//! Path arithmetic for remote storage paths.
//!
//! Remote paths are absolute, `/`-separated strings. The helpers here never
//! touch the network; they only compute the strings sent to the API.

/// Directory to list when the user asks for an empty path.
pub const ROOT: &str = "/";

/// Empty input means the root directory.
pub fn or_root(dir: &str) -> &str {
    if dir.trim().is_empty() { ROOT } else { dir }
}

/// Parent of `dir`: everything before the last `/`, or `/` when that is empty.
pub fn parent_dir(dir: &str) -> String {
    let trimmed = dir.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) if idx > 0 => trimmed[..idx].to_string(),
        _ => ROOT.to_string(),
    }
}

/// Join a directory and a relative name, collapsing duplicate slashes.
pub fn join_path(dir: &str, name: &str) -> String {
    let joined = format!("{}/{}", dir, name);
    collapse_slashes(&joined)
}

/// Ensure `dir` ends with `/`.
pub fn with_trailing_slash(dir: &str) -> String {
    if dir.ends_with('/') {
        dir.to_string()
    } else {
        format!("{}/", dir)
    }
}

/// Last path segment (the display name of a path).
pub fn file_name(path: &str) -> &str {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
}

/// Full target path for a rename: the new name placed in `current_dir`.
pub fn rename_target(current_dir: &str, new_name: &str) -> String {
    format!("{}{}", with_trailing_slash(current_dir), new_name.trim())
}

/// Target of a rename request, or `None` when the name is unchanged and no
/// request is needed.
pub fn rename_request(current_dir: &str, old_key: &str, new_name: &str) -> Option<String> {
    let new_key = rename_target(current_dir, new_name);
    (new_key != old_key).then_some(new_key)
}

/// Upload directory for one file of a directory-tree upload.
///
/// `relative_path` is the browser's `webkitRelativePath` (e.g.
/// `photos/2024/img.png`); the file goes to `current_dir` plus the relative
/// directory part.
pub fn tree_upload_dir(current_dir: &str, relative_path: &str, file_name: &str) -> String {
    let rel_dir = relative_path
        .strip_suffix(file_name)
        .unwrap_or(relative_path)
        .trim_end_matches('/');
    if rel_dir.is_empty() {
        return current_dir.to_string();
    }
    join_path(current_dir, rel_dir)
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_root() {
        assert_eq!(or_root(""), "/");
        assert_eq!(or_root("  "), "/");
        assert_eq!(or_root("/var"), "/var");
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir("/var/log"), "/var");
        assert_eq!(parent_dir("/var"), "/");
        assert_eq!(parent_dir("/var/log/"), "/var");
        assert_eq!(parent_dir("/"), "/");
        assert_eq!(parent_dir(""), "/");
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/", "etc"), "/etc");
        assert_eq!(join_path("/var", "log"), "/var/log");
        assert_eq!(join_path("/var/", "/log"), "/var/log");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/etc/nginx/nginx.conf"), "nginx.conf");
        assert_eq!(file_name("/etc/nginx/"), "nginx");
        assert_eq!(file_name("readme"), "readme");
        assert_eq!(file_name(""), "");
    }

    #[test]
    fn test_rename_request_skips_unchanged_name() {
        assert_eq!(rename_request("/srv", "/srv/a.txt", "a.txt"), None);
        assert_eq!(rename_request("/srv/", "/srv/a.txt", " a.txt "), None);
        assert_eq!(
            rename_request("/srv", "/srv/a.txt", "b.txt"),
            Some("/srv/b.txt".to_string())
        );
    }

    #[test]
    fn test_rename_target() {
        assert_eq!(rename_target("/srv", "new.txt"), "/srv/new.txt");
        assert_eq!(rename_target("/", "new.txt"), "/new.txt");
        assert_eq!(rename_target("/srv/", " spaced.txt "), "/srv/spaced.txt");
    }

    #[test]
    fn test_tree_upload_dir() {
        assert_eq!(
            tree_upload_dir("/", "photos/2024/img.png", "img.png"),
            "/photos/2024"
        );
        assert_eq!(
            tree_upload_dir("/backup", "site/index.html", "index.html"),
            "/backup/site"
        );
        assert_eq!(tree_upload_dir("/backup", "loose.txt", "loose.txt"), "/backup");
    }
}
