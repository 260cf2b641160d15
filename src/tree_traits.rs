use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::arena::MansionArena;
use crate::direction::Direction;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for MansionArena {
    /// Renders the layout with each room prefixed by the key that leads into it.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(mansion: &MansionArena, idx: Index, parent_tree: &mut Tree<String>) {
            let Some(room) = mansion.get(idx) else {
                return;
            };
            for direction in Direction::ALL {
                let Some(child_idx) = room.child(direction) else {
                    continue;
                };
                if let Some(child) = mansion.get(child_idx) {
                    let mut child_tree = Tree::new(format!("[{}] {}", direction.key(), child.name()));
                    build_tree(mansion, child_idx, &mut child_tree);
                    parent_tree.push(child_tree);
                }
            }
        }

        match self.root().and_then(|root| self.get(root).map(|room| (root, room))) {
            Some((root_idx, root)) => {
                let mut tree = Tree::new(root.name().to_string());
                build_tree(self, root_idx, &mut tree);
                tree
            }
            None => Tree::new("Empty mansion".to_string()),
        }
    }
}
