// extensions/search.rs
//
// Tag lookups over any `SceneTree`.

use crate::api::traits::SceneTree;

/// Visit `root` and all of its descendants depth-first (pre-order).
/// Uses an explicit stack, so deep trees do not grow the call stack.
pub fn visit_depth_first<T, F>(tree: &T, root: T::Node, mut visitor: F)
where
    T: SceneTree + ?Sized,
    F: FnMut(T::Node),
{
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        visitor(node);
        // Reversed so children come off the stack in their stored order.
        stack.extend(tree.children(node).iter().rev().copied());
    }
}

/// `root` and every descendant whose tag equals `tag`.
pub fn find_with_tag<T>(tree: &T, root: T::Node, tag: &str) -> Vec<T::Node>
where
    T: SceneTree + ?Sized,
{
    collect_with_tag(tree, root, tag, Some)
}

/// Like [`find_with_tag`], mapping each match through `f` and keeping the
/// `Some` results (e.g. pick a component off each tagged node).
pub fn collect_with_tag<T, R, F>(tree: &T, root: T::Node, tag: &str, mut f: F) -> Vec<R>
where
    T: SceneTree + ?Sized,
    F: FnMut(T::Node) -> Option<R>,
{
    let mut results = Vec::new();
    visit_depth_first(tree, root, |node| {
        if tree.tag(node) == Some(tag) {
            results.extend(f(node));
        }
    });
    results
}
