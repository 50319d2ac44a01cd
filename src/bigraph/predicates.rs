//! Structural predicates on bigraphs.
use super::*;

impl Bigraph {
    /// A ground bigraph has the origin as its inner face: no sites and no inner names.
    pub fn is_ground(&self) -> bool {
        self.sites.is_empty() && self.inner_names.is_empty()
    }

    /// A prime bigraph has exactly one root and no inner names.
    pub fn is_prime(&self) -> bool {
        self.roots.len() == 1 && self.inner_names.is_empty()
    }

    /// Epimorphic: no root is idle and no outer name is idle.
    pub fn is_epimorphic(&self) -> bool {
        self.roots.iter().all(|children| !children.is_empty())
            && self.outer_names.iter().all(|o| !o.points.is_empty())
    }

    /// Monomorphic: no two sites are siblings and no two inner names share a link.
    pub fn is_monomorphic(&self) -> bool {
        fn sibling_sites(children: &[Child]) -> bool {
            children.iter().filter(|c| matches!(c, Child::Site(_))).count() > 1
        }
        if self.roots.iter().any(|c| sibling_sites(c))
            || self.nodes.iter().any(|n| sibling_sites(&n.children))
        {
            return false;
        }

        self.links().all(|link| {
            self.points_of(link)
                .iter()
                .filter(|p| matches!(p, Point::Inner(_)))
                .count()
                <= 1
        })
    }

    /// Guarding: no site has a root as its parent and no inner name is linked to an outer name.
    pub fn is_guarding(&self) -> bool {
        self.sites.iter().all(|p| matches!(p, Place::Node(_)))
            && self
                .inner_names
                .iter()
                .all(|i| !matches!(i.link, Some(Link::Outer(_))))
    }

    /// Discrete: there are no edges and every outer name has exactly one point.
    pub fn is_discrete(&self) -> bool {
        self.edges.is_empty() && self.outer_names.iter().all(|o| o.points.len() == 1)
    }

    /// A site is active when every node above it has an active control.
    pub fn is_active_at_site(&self, site: SiteId) -> bool {
        self.ancestors(Child::Site(site))
            .into_iter()
            .filter_map(Place::node)
            .all(|n| self.nodes[n.0].control.is_active())
    }

    /// Active at every site.
    pub fn is_active(&self) -> bool {
        self.sites().all(|s| self.is_active_at_site(s))
    }
}
