//! 键控列表协调
//!
//! 比较两次渲染之间的列表，只对新增、删除和移动的条目产生操作，
//! 标识未变的条目保持原样。

use std::collections::{HashMap, HashSet};

use crate::view::RenderKey;

/// 列表补丁操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOp {
    /// 条目位置不变，无需重新渲染
    Keep { key: String, index: usize },
    /// 条目保留但位置变化
    Move { key: String, from: usize, to: usize },
    /// 新条目
    Insert { key: String, index: usize },
    /// 已不存在的条目
    Remove { key: String, index: usize },
}

impl ListOp {
    pub fn key(&self) -> &str {
        match self {
            ListOp::Keep { key, .. }
            | ListOp::Move { key, .. }
            | ListOp::Insert { key, .. }
            | ListOp::Remove { key, .. } => key,
        }
    }

    /// 是否需要触碰 DOM
    pub fn is_change(&self) -> bool {
        !matches!(self, ListOp::Keep { .. })
    }
}

/// 计算从 `previous` 键序列到 `next` 列表的补丁
///
/// 删除操作按下标倒序排在最前，其余操作按 `next` 的顺序排列。
pub fn diff_keyed<T: RenderKey>(previous: &[String], next: &[T]) -> Vec<ListOp> {
    let old_positions: HashMap<&str, usize> = previous
        .iter()
        .enumerate()
        .map(|(index, key)| (key.as_str(), index))
        .collect();

    let next_keys: Vec<String> = next.iter().map(RenderKey::render_key).collect();
    let retained: HashSet<&str> = next_keys.iter().map(String::as_str).collect();

    let mut ops: Vec<ListOp> = previous
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, key)| !retained.contains(key.as_str()))
        .map(|(index, key)| ListOp::Remove {
            key: key.clone(),
            index,
        })
        .collect();

    for (to, key) in next_keys.into_iter().enumerate() {
        let op = match old_positions.get(key.as_str()) {
            Some(&from) if from == to => ListOp::Keep { key, index: to },
            Some(&from) => ListOp::Move { key, from, to },
            None => ListOp::Insert { key, index: to },
        };
        ops.push(op);
    }

    ops
}

/// 取列表的键序列，供下一次协调使用
pub fn keys_of<T: RenderKey>(items: &[T]) -> Vec<String> {
    items.iter().map(RenderKey::render_key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectEntry;
    use crate::services::Catalog;

    fn projects(names: &[&str]) -> Vec<ProjectEntry> {
        names
            .iter()
            .map(|name| ProjectEntry::new(*name, "desc", ["tag"]))
            .collect()
    }

    #[test]
    fn test_identical_lists_only_keep() {
        let skills = Catalog::shipped().skills;
        let ops = diff_keyed(&keys_of(&skills), &skills);
        assert_eq!(ops.len(), skills.len());
        assert!(ops.iter().all(|op| !op.is_change()));
    }

    #[test]
    fn test_insert_remove_move() {
        let previous = keys_of(&projects(&["a", "b", "c"]));
        let next = projects(&["c", "a", "d"]);

        let ops = diff_keyed(&previous, &next);
        assert_eq!(
            ops,
            vec![
                ListOp::Remove { key: "b".into(), index: 1 },
                ListOp::Move { key: "c".into(), from: 2, to: 0 },
                ListOp::Move { key: "a".into(), from: 0, to: 1 },
                ListOp::Insert { key: "d".into(), index: 2 },
            ]
        );
    }

    #[test]
    fn test_content_change_with_same_key_is_kept() {
        let previous = keys_of(&projects(&["a"]));
        let next = vec![ProjectEntry::new("a", "rewritten", ["other"])];

        let ops = diff_keyed(&previous, &next);
        assert_eq!(ops, vec![ListOp::Keep { key: "a".into(), index: 0 }]);
        assert_eq!(ops[0].key(), "a");
    }

    #[test]
    fn test_first_render_inserts_everything() {
        let timeline = Catalog::shipped().timeline;
        let ops = diff_keyed(&[], &timeline);
        assert!(ops.iter().all(|op| matches!(op, ListOp::Insert { .. })));
    }
}
