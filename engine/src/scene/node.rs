//! Transform hierarchy
//!
//! An explicit tree of named nodes. Each node exclusively owns its children;
//! a node's world matrix is the product of its ancestors' local matrices and
//! its own.

use glam::{Mat4, Vec3};

use super::transform::Transform;

/// A named node with a local transform and owned children.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub local: Transform,
    children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>, local: Transform) -> Self {
        Self {
            name: name.into(),
            local,
            children: Vec::new(),
        }
    }

    /// Builder-style child attachment.
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.add_child(child);
        self
    }

    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    /// Depth-first search for a node by name, including `self`.
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(name))
    }

    /// World matrix of the named node, with this node's parent at `Mat4::IDENTITY`.
    pub fn world_matrix_of(&self, name: &str) -> Option<Mat4> {
        self.world_matrix_under(Mat4::IDENTITY, name)
    }

    fn world_matrix_under(&self, parent: Mat4, name: &str) -> Option<Mat4> {
        let world = parent * self.local.to_matrix();
        if self.name == name {
            return Some(world);
        }
        self.children
            .iter()
            .find_map(|child| child.world_matrix_under(world, name))
    }

    /// World-space origin of the named node.
    pub fn world_position_of(&self, name: &str) -> Option<Vec3> {
        self.world_matrix_of(name)
            .map(|m| m.transform_point3(Vec3::ZERO))
    }

    /// Every node's world matrix, in depth-first order.
    pub fn world_transforms(&self) -> Vec<(&str, Mat4)> {
        let mut out = Vec::new();
        self.collect_world(Mat4::IDENTITY, &mut out);
        out
    }

    fn collect_world<'a>(&'a self, parent: Mat4, out: &mut Vec<(&'a str, Mat4)>) {
        let world = parent * self.local.to_matrix();
        out.push((self.name.as_str(), world));
        for child in &self.children {
            child.collect_world(world, out);
        }
    }

    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SceneNode::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> SceneNode {
        SceneNode::new("root", Transform::from_translation(Vec3::new(1.0, 0.0, 0.0))).with_child(
            SceneNode::new("child", Transform::from_translation(Vec3::new(0.0, 2.0, 0.0)))
                .with_child(SceneNode::new(
                    "leaf",
                    Transform::from_translation(Vec3::new(0.0, 0.0, 3.0)),
                )),
        )
    }

    #[test]
    fn test_world_position_folds_ancestors() {
        let tree = sample_tree();
        let leaf = tree.world_position_of("leaf").unwrap();
        assert!((leaf - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    }

    #[test]
    fn test_add_child_attaches_under_parent() {
        let mut tree = sample_tree();
        tree.find_mut("child")
            .unwrap()
            .add_child(SceneNode::new("extra", Transform::from_translation(Vec3::X)));

        let child = tree.find("child").unwrap();
        let names: Vec<&str> = child.children().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["leaf", "extra"]);
        assert_eq!(tree.node_count(), 4);

        let extra = tree.world_position_of("extra").unwrap();
        assert!((extra - Vec3::new(2.0, 2.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_find_missing() {
        let tree = sample_tree();
        assert!(tree.find("nope").is_none());
        assert!(tree.world_matrix_of("nope").is_none());
    }

    #[test]
    fn test_find_mut_updates_local() {
        let mut tree = sample_tree();
        tree.find_mut("child").unwrap().local.translation = Vec3::ZERO;
        let leaf = tree.world_position_of("leaf").unwrap();
        assert!((leaf - Vec3::new(1.0, 0.0, 3.0)).length() < 1e-6);
    }

    #[test]
    fn test_world_transforms_depth_first() {
        let tree = sample_tree();
        let names: Vec<&str> = tree.world_transforms().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["root", "child", "leaf"]);
        assert_eq!(tree.node_count(), 3);
    }
}
