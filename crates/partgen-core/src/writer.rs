//! Materializes a planned tree on disk
//!
//! The planner hands over a [`DirectoryNode`]; this module walks it and
//! writes every file in plan order.

use crate::tree::{DirectoryNode, TreeNode};
use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Write the planned tree under `target_dir` and return the written file
/// paths, in write order
pub async fn write_tree(target_dir: &Path, root: &DirectoryNode) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    let mut pending: VecDeque<(PathBuf, &DirectoryNode)> = VecDeque::new();
    pending.push_back((target_dir.join(&root.path), root));

    while let Some((dir_path, dir)) = pending.pop_front() {
        fs::create_dir_all(&dir_path)
            .await
            .with_context(|| format!("Failed to create directory: {}", dir_path.display()))?;

        for child in &dir.children {
            match child {
                TreeNode::File(file) => {
                    let file_path = dir_path.join(&file.path);
                    fs::write(&file_path, &file.content)
                        .await
                        .with_context(|| {
                            format!("Failed to write file: {}", file_path.display())
                        })?;
                    written.push(file_path);
                }
                TreeNode::Directory(sub) => {
                    pending.push_back((dir_path.join(&sub.path), sub));
                }
            }
        }
    }

    Ok(written)
}
