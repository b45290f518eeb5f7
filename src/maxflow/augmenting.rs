// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Working data shared by the augmenting path algorithms.

use crate::capacity::CapacityGraph;
use crate::error::Result;
use crate::residual::ResidualGraph;
use crate::search::{AugmentingPath, Dfs};

use log::trace;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::num::traits::{CheckedAdd, NumAssign, Signed};

/// Residual graph, search data and counters of an augmenting path run.
pub(crate) struct PathAugmenter<N, F> {
    pub(crate) g: ResidualGraph<N, F>,
    dfs: Dfs<F>,
    pub(crate) src: usize,
    snk: usize,
    pub(crate) value: F,
    pub(crate) cnt_augment: usize,
}

impl<N, F> PathAugmenter<N, F>
where
    N: Eq + Hash + Clone + Debug,
    F: NumAssign + Signed + CheckedAdd + Ord + Copy + Display,
{
    pub(crate) fn new(g: &CapacityGraph<N, F>) -> Result<Self> {
        Ok(PathAugmenter {
            g: ResidualGraph::build(g)?,
            dfs: Dfs::new(),
            src: 0,
            snk: 0,
            value: F::zero(),
            cnt_augment: 0,
        })
    }

    /// Select the terminals and remove the flow of a previous run.
    pub(crate) fn start(&mut self, src: &N, snk: &N) -> Result<()> {
        let (src, snk) = self.g.terminals(src, snk)?;
        self.g.reset();
        self.src = src;
        self.snk = snk;
        self.value = F::zero();
        self.cnt_augment = 0;
        Ok(())
    }

    /// Augment along paths over arcs with residual capacity at least `delta`
    /// until the sink is no longer reachable.
    ///
    /// With `delta == None` every arc with positive residual capacity is used.
    pub(crate) fn augment_all<O>(&mut self, delta: Option<F>, observe: &mut O)
    where
        O: FnMut(&AugmentingPath<F>, F),
    {
        loop {
            let path = match delta {
                Some(delta) => self.dfs.find_scaled(&self.g, self.src, self.snk, delta),
                None => self.dfs.find(&self.g, self.src, self.snk),
            };
            let path = match path {
                Some(path) => path,
                None => break,
            };

            debug_assert!(path.bottleneck > F::zero());
            debug_assert!(delta.map_or(true, |delta| path.bottleneck >= delta));
            self.g.augment_path(&path.arcs, path.bottleneck);
            self.value += path.bottleneck;
            self.cnt_augment += 1;
            trace!(
                "augmentation {}: {} units over {} arcs",
                self.cnt_augment,
                path.bottleneck,
                path.arcs.len()
            );
            observe(&path, self.value);
        }
    }

    pub(crate) fn mincut(&self) -> Vec<&N> {
        self.g
            .source_side(self.src)
            .into_iter()
            .map(|u| self.g.node(u))
            .collect()
    }
}
