use crate::dataset::PointId;

/// A group of point ids produced by a clustering algorithm.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    pub name: Option<String>,
    ids: Vec<PointId>,
    noise: bool,
}

impl Cluster {
    pub fn new(ids: Vec<PointId>) -> Self {
        Self {
            name: None,
            ids,
            noise: false,
        }
    }

    /// Cluster holding the points an algorithm declined to assign.
    pub fn noise(ids: Vec<PointId>) -> Self {
        Self {
            name: None,
            ids,
            noise: true,
        }
    }

    pub fn singleton(id: PointId) -> Self {
        Self::new(vec![id])
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn ids(&self) -> &[PointId] {
        &self.ids
    }

    pub fn is_noise(&self) -> bool {
        self.noise
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Ordered sequence of clusters partitioning a point set.
///
/// No id may appear in more than one cluster. This is a precondition of the
/// producer and is not re-validated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Clustering {
    clusters: Vec<Cluster>,
}

impl Clustering {
    pub fn new(clusters: Vec<Cluster>) -> Self {
        Self { clusters }
    }

    pub fn push(&mut self, cluster: Cluster) {
        self.clusters.push(cluster);
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Number of points across all clusters, noise included.
    pub fn total_size(&self) -> usize {
        self.clusters.iter().map(Cluster::len).sum()
    }

    pub fn noise_size(&self) -> usize {
        self.clusters
            .iter()
            .filter(|c| c.is_noise())
            .map(Cluster::len)
            .sum()
    }

    /// Replace every noise cluster, in place, by one singleton per member.
    pub fn noise_to_singletons(&self) -> Clustering {
        let mut clusters = Vec::with_capacity(self.clusters.len());

        for cluster in &self.clusters {
            if cluster.is_noise() {
                clusters.extend(cluster.ids().iter().map(|&id| Cluster::singleton(id)));
            } else {
                clusters.push(cluster.clone());
            }
        }

        Clustering { clusters }
    }
}

impl FromIterator<Cluster> for Clustering {
    fn from_iter<I: IntoIterator<Item = Cluster>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
