//! # 文件收集器
//!
//! 根据目录和模式收集待处理文件列表（.gjf / .log / .chk）。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - 逗号分隔的多个 glob 模式
//! - 可选递归搜索
//! - 结果按路径排序，保证处理顺序稳定
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{GautilityError, Result};

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<Pattern>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            patterns: Vec::new(),
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                Pattern::new(s).map_err(|e| {
                    GautilityError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Vec<PathBuf> {
        if self.input.is_file() {
            return vec![self.input.clone()];
        }

        if !self.input.is_dir() {
            return vec![];
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|entry| self.matches_patterns(entry.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// 检查文件是否匹配任一模式（无模式时全部匹配）
    fn matches_patterns(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.is_empty() || self.patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gautility-collector-{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_collect_by_pattern() {
        let dir = scratch_dir("pattern");
        for name in ["b.gjf", "a.gjf", "a_res.log", "a.chk", "notes.txt"] {
            fs::write(dir.join(name), "").unwrap();
        }

        let inputs = FileCollector::new(&dir)
            .with_pattern("*.gjf,*.com")
            .unwrap()
            .collect();
        let names: Vec<_> = inputs
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.gjf", "b.gjf"]);

        let logs = FileCollector::new(&dir).with_pattern("*.log").unwrap().collect();
        assert_eq!(logs.len(), 1);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_recursive_collect() {
        let dir = scratch_dir("recursive");
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(dir.join("top.chk"), "").unwrap();
        fs::write(dir.join("sub").join("deep.chk"), "").unwrap();

        let flat = FileCollector::new(&dir).with_pattern("*.chk").unwrap().collect();
        assert_eq!(flat.len(), 1);

        let deep = FileCollector::new(&dir)
            .with_pattern("*.chk")
            .unwrap()
            .recursive(true)
            .collect();
        assert_eq!(deep.len(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(FileCollector::new(".").with_pattern("[").is_err());
    }
}
