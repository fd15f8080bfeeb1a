//! OR-combination of termination conditions over tuples.

use super::{Termination, TerminationReason};
use crate::stats::SearchStats;

/// Terminates when any child terminates; the first child that fires
/// supplies the reason.
///
/// # Example
///
/// ```
/// use shiftforge_solver::termination::{NodeCountTermination, OrTermination, TimeTermination};
///
/// // Stop after 30 seconds or 100 000 nodes.
/// let termination = OrTermination((
///     TimeTermination::seconds(30),
///     NodeCountTermination::new(100_000),
/// ));
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn check(&self, stats: &SearchStats) -> Option<TerminationReason> {
                None$(.or_else(|| (self.0).$idx.check(stats)))+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
