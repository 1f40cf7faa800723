use crate::color::{Color, COMPONENTS};
use crate::color_hist::ColorHist;
use crate::error::{QuantizeError, Result};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Reduces a color population to a palette of at most `max_colors` colors.
pub trait ColorQuantizer {
    fn quantize(&self, colors: &ColorHist, max_colors: usize) -> Result<BTreeSet<Color>>;
}

/// Median cut quantization.
///
/// Starting from one cluster holding every color, the cluster with the
/// largest spread along a single component is repeatedly split at the median
/// of its distinct colors along that component. The palette is the weighted
/// centroid of each final cluster.
///
/// Ties never depend on hashing or insertion order. Components with equal
/// spread resolve to the lowest index, colors with an equal component value
/// are ordered by [`Color`]'s `Ord`, and clusters with equal spread are
/// ordered by their smallest color, smallest first.
///
/// A cluster with one distinct color is never split. If every cluster is down
/// to a single color before `max_colors` is reached, the palette is simply
/// every distinct input color.
#[derive(Default, Clone, Copy, Debug)]
pub struct MedianCutQuantizer;

impl ColorQuantizer for MedianCutQuantizer {
    fn quantize(&self, colors: &ColorHist, max_colors: usize) -> Result<BTreeSet<Color>> {
        if max_colors == 0 {
            return Err(QuantizeError::InvalidTargetSize(max_colors));
        }
        if colors.is_empty() {
            return Err(QuantizeError::EmptyInput);
        }
        debug!(
            max_colors,
            distinct = colors.distinct(),
            "median_cut: requested palette size"
        );

        let mut pool = Pool::default();
        let mut queue = PriorityQueue::new();
        let root = Cluster::new(colors.clone());
        let priority = root.priority();
        queue.push(pool.insert(root), priority);

        while queue.len() < max_colors {
            let id = match queue.peek() {
                Some((&id, &(spread, _))) if spread > 0 => id,
                _ => {
                    debug!(clusters = queue.len(), "median_cut: no cluster left to split");
                    break;
                }
            };
            queue.remove(&id);
            let (low, high) = pool.delete(id).split();
            for cluster in [low, high] {
                let priority = cluster.priority();
                queue.push(pool.insert(cluster), priority);
            }
        }

        let palette = queue
            .iter()
            .map(|(&id, _)| Color::centroid(&pool.get(id).colors))
            .collect::<Result<BTreeSet<_>>>()?;
        debug!(
            clusters = queue.len(),
            palette = palette.len(),
            "median_cut: palette built"
        );
        Ok(palette)
    }
}

type Priority = (u8, Reverse<Color>);

#[derive(Default, Debug)]
struct Cluster {
    colors: ColorHist,
    spread: u8,
    component: usize,
    smallest: Color,
}

impl Cluster {
    fn new(colors: ColorHist) -> Self {
        let mut min = [u8::MAX; COMPONENTS];
        let mut max = [u8::MIN; COMPONENTS];
        for color in colors.colors() {
            for i in 0..COMPONENTS {
                min[i] = min[i].min(color.component(i));
                max[i] = max[i].max(color.component(i));
            }
        }

        let mut spread = 0;
        let mut component = 0;
        for i in 0..COMPONENTS {
            let delta = max[i].saturating_sub(min[i]);
            if delta > spread {
                spread = delta;
                component = i;
            }
        }
        let smallest = colors.colors().min().unwrap_or_default();

        Self {
            colors,
            spread,
            component,
            smallest,
        }
    }

    fn priority(&self) -> Priority {
        (self.spread, Reverse(self.smallest))
    }

    /// Splits at the median of the distinct colors along the widest component.
    /// The low half gets `n / 2` colors, the high half the rest.
    fn split(self) -> (Cluster, Cluster) {
        let component = self.component;
        let mut ordered: Vec<Color> = self.colors.colors().collect();
        ordered.sort_unstable_by_key(|&color| (color.component(component), color));
        let (low, high) = ordered.split_at(ordered.len() / 2);
        let take = |half: &[Color]| -> ColorHist {
            half.iter().fold(ColorHist::new(), |mut hist, &color| {
                hist.add_wide(color, self.colors.count(color));
                hist
            })
        };
        let (low, high) = (take(low), take(high));
        trace!(
            spread = self.spread,
            component,
            low = low.distinct(),
            high = high.distinct(),
            "median_cut: split cluster"
        );
        (Cluster::new(low), Cluster::new(high))
    }
}

#[derive(Debug, Default)]
struct Pool {
    clusters: Vec<Cluster>,
}

impl Pool {
    fn insert(&mut self, cluster: Cluster) -> usize {
        let id = self.clusters.len();
        self.clusters.push(cluster);
        id
    }

    fn get(&self, id: usize) -> &Cluster {
        &self.clusters[id]
    }

    fn delete(&mut self, id: usize) -> Cluster {
        std::mem::take(&mut self.clusters[id])
    }
}
