//! In-memory file tree returned by the planner
//!
//! Child order is significant: it is the order the writer materializes files
//! in, so plans stay reproducible.

/// A single emitted file: relative path plus full textual content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub path: String,
    pub content: String,
}

impl FileNode {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A directory with an ordered list of children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    pub path: String,
    pub children: Vec<TreeNode>,
}

/// Either a file or a nested directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File(FileNode),
    Directory(DirectoryNode),
}

impl DirectoryNode {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            children: Vec::new(),
        }
    }

    pub fn push_file(&mut self, file: FileNode) {
        self.children.push(TreeNode::File(file));
    }

    pub fn push_dir(&mut self, dir: DirectoryNode) {
        self.children.push(TreeNode::Directory(dir));
    }

    /// Direct file children, in plan order
    pub fn files(&self) -> impl Iterator<Item = &FileNode> {
        self.children.iter().filter_map(|child| match child {
            TreeNode::File(file) => Some(file),
            TreeNode::Directory(_) => None,
        })
    }

    /// All file paths in the tree, joined with `/` and rooted at this
    /// directory's name, in write order
    pub fn file_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths(&self.path, &mut paths);
        paths
    }

    fn collect_paths(&self, base: &str, out: &mut Vec<String>) {
        for child in &self.children {
            match child {
                TreeNode::File(file) => out.push(format!("{}/{}", base, file.path)),
                TreeNode::Directory(dir) => {
                    dir.collect_paths(&format!("{}/{}", base, dir.path), out)
                }
            }
        }
    }
}
