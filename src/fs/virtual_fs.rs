//! Virtual File System
//!
//! A fixed, read-only tree rooted at the home directory. Path resolution is
//! deliberately narrow: the root answers to `.` and to the current
//! directory, the nested directory answers to its own name, and nothing
//! else resolves.

use indexmap::IndexMap;

use super::types::*;

pub const EXPERIMENTS_DIR: &str = "experiments";

/// The fake home directory and everything under it.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    home: String,
    root: IndexMap<String, VNode>,
}

impl VirtualFs {
    /// Build the default tree under `home`.
    pub fn new(home: &str) -> Self {
        let root = [
            ("about.txt", VNode::file("about-content")),
            (
                EXPERIMENTS_DIR,
                VNode::directory([
                    ("sitch.lol", VNode::file("sitch-content")),
                    ("merch.txt", VNode::file("merch-content")),
                    ("secret_project_x.???", VNode::file("secret-content")),
                ]),
            ),
            ("contact.sh", VNode::file("contact-content")),
        ]
        .into_iter()
        .map(|(name, node)| (name.to_string(), node))
        .collect();

        Self { home: home.to_string(), root }
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    fn experiments(&self) -> Option<&IndexMap<String, VNode>> {
        match self.root.get(EXPERIMENTS_DIR) {
            Some(VNode::Directory { entries }) => Some(entries),
            _ => None,
        }
    }

    fn resolve_dir(&self, path: &str, cwd: &str) -> Option<&IndexMap<String, VNode>> {
        if path == "." || path == cwd {
            return Some(&self.root);
        }
        if path == EXPERIMENTS_DIR || path.strip_suffix('/') == Some(EXPERIMENTS_DIR) {
            return self.experiments();
        }
        None
    }

    /// List a directory's entries in insertion order.
    pub fn list(&self, path: &str, cwd: &str) -> Result<Vec<DirentEntry>, FsError> {
        let entries = self
            .resolve_dir(path, cwd)
            .ok_or_else(|| FsError::not_found(path, "scandir"))?;

        Ok(entries
            .iter()
            .map(|(name, node)| DirentEntry { name: name.clone(), kind: node.kind() })
            .collect())
    }

    /// Look a file up by bare name: the root first, then one level into
    /// `experiments`.
    pub fn read(&self, name: &str) -> Result<&str, FsError> {
        let found = match self.root.get(name) {
            Some(VNode::File { content }) => Some(content),
            _ => match self.experiments().and_then(|dir| dir.get(name)) {
                Some(VNode::File { content }) => Some(content),
                _ => None,
            },
        };

        found
            .map(String::as_str)
            .ok_or_else(|| FsError::not_found(name, "open"))
    }

    /// Validate a `cd` target and return the new working directory.
    ///
    /// No target means home. An accepted target becomes the working
    /// directory exactly as typed.
    pub fn change_directory(&self, path: Option<&str>, cwd: &str) -> Result<String, FsError> {
        let Some(path) = path else {
            return Ok(self.home.clone());
        };

        match self.resolve_dir(path, cwd) {
            Some(_) => Ok(path.to_string()),
            None => Err(FsError::not_found(path, "chdir")),
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new("/home/user")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: &str = "/home/user";

    fn names(entries: &[DirentEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_list_root_by_dot_and_cwd() {
        let fs = VirtualFs::default();
        let dot = fs.list(".", HOME).unwrap();
        let cwd = fs.list(HOME, HOME).unwrap();
        assert_eq!(names(&dot), vec!["about.txt", "experiments", "contact.sh"]);
        assert_eq!(dot, cwd);
        assert!(dot[1].is_directory());
        assert!(!dot[0].is_directory());
    }

    #[test]
    fn test_list_cwd_is_root_even_inside_experiments() {
        let fs = VirtualFs::default();
        let cwd = fs.change_directory(Some("experiments"), HOME).unwrap();
        let entries = fs.list(&cwd, &cwd).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "about.txt");
    }

    #[test]
    fn test_list_experiments_with_and_without_slash() {
        let fs = VirtualFs::default();
        let plain = fs.list("experiments", HOME).unwrap();
        let slash = fs.list("experiments/", HOME).unwrap();
        assert_eq!(plain, slash);
        assert_eq!(names(&plain), vec!["sitch.lol", "merch.txt", "secret_project_x.???"]);
        assert!(plain.iter().all(|e| e.kind == NodeKind::File));
    }

    #[test]
    fn test_list_unknown_path() {
        let fs = VirtualFs::default();
        assert_eq!(fs.list("/etc", HOME), Err(FsError::not_found("/etc", "scandir")));
        assert!(fs.list("experiments/deeper", HOME).is_err());
        assert!(fs.list("..", HOME).is_err());
    }

    #[test]
    fn test_read_root_file() {
        let fs = VirtualFs::default();
        assert_eq!(fs.read("about.txt"), Ok("about-content"));
        assert_eq!(fs.read("contact.sh"), Ok("contact-content"));
    }

    #[test]
    fn test_read_falls_through_to_experiments() {
        let fs = VirtualFs::default();
        assert!(!fs.root.contains_key("secret_project_x.???"));
        assert_eq!(fs.read("secret_project_x.???"), Ok("secret-content"));
        assert_eq!(fs.read("sitch.lol"), Ok("sitch-content"));
    }

    #[test]
    fn test_read_missing_and_directories() {
        let fs = VirtualFs::default();
        assert!(fs.read("nope.txt").is_err());
        assert!(fs.read("experiments").is_err());
        assert!(fs.read("experiments/merch.txt").is_err());
    }

    #[test]
    fn test_change_directory_round_trip() {
        let fs = VirtualFs::default();
        let inside = fs.change_directory(Some("experiments"), HOME).unwrap();
        assert_eq!(inside, "experiments");
        let back = fs.change_directory(None, &inside).unwrap();
        assert_eq!(back, fs.home());
    }

    #[test]
    fn test_change_directory_keeps_argument_verbatim() {
        let fs = VirtualFs::default();
        assert_eq!(fs.change_directory(Some("."), HOME).unwrap(), ".");
        assert_eq!(fs.change_directory(Some("experiments/"), HOME).unwrap(), "experiments/");
        assert_eq!(fs.change_directory(Some(HOME), HOME).unwrap(), HOME);
    }

    #[test]
    fn test_experiments_lists_root_once_it_is_the_cwd() {
        let fs = VirtualFs::default();
        let cwd = fs.change_directory(Some("experiments"), HOME).unwrap();
        let entries = fs.list("experiments", &cwd).unwrap();
        assert_eq!(names(&entries), vec!["about.txt", "experiments", "contact.sh"]);
        // The trailing-slash form is not the cwd, so it still reaches the nested directory.
        assert_eq!(fs.list("experiments/", &cwd).unwrap().len(), 3);
        assert_eq!(fs.list("experiments/", &cwd).unwrap()[0].name, "sitch.lol");
    }

    #[test]
    fn test_change_directory_rejected() {
        let fs = VirtualFs::default();
        let err = fs.change_directory(Some("/tmp"), HOME).unwrap_err();
        assert_eq!(err.to_string(), "ENOENT: no such file or directory, chdir '/tmp'");
    }
}
