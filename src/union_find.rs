/// Disjoint sets over `0..n`, used to merge links that become one under name sharing.
#[derive(Debug, Clone)]
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // path compression
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    pub fn union(&mut self, x: usize, y: usize) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return;
        }

        let (child, parent) = if self.size[root_x] >= self.size[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };

        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        self.components -= 1;
    }

    /// The equivalence classes, each sorted, ordered by their smallest element.
    pub fn classes(&mut self) -> Vec<Vec<usize>> {
        let mut index_of_root: Vec<Option<usize>> = vec![None; self.len()];
        let mut classes: Vec<Vec<usize>> = Vec::with_capacity(self.components);
        for x in 0..self.len() {
            let root = self.find(x);
            match index_of_root[root] {
                Some(i) => classes[i].push(x),
                None => {
                    index_of_root[root] = Some(classes.len());
                    classes.push(vec![x]);
                }
            }
        }
        classes
    }
}
