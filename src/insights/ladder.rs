// =============================================================================
// Decision tables: threshold ladders and ordered rule lists
// =============================================================================
//
// Both tables are evaluated top-down and the first match wins, so the order
// of the entries is the contract.

/// Ordered `(threshold, tag)` rungs compared with `>=`, highest first, plus
/// the tag returned when no rung matches.
#[derive(Debug, Clone, Copy)]
pub struct Ladder<T: 'static> {
    rungs: &'static [(f64, T)],
    floor: T,
}

impl<T: Copy + 'static> Ladder<T> {
    pub const fn new(rungs: &'static [(f64, T)], floor: T) -> Self {
        Self { rungs, floor }
    }

    /// Tag of the first rung whose threshold `value` reaches.
    ///
    /// NaN reaches no rung and lands on the floor.
    pub fn classify(&self, value: f64) -> T {
        self.rungs
            .iter()
            .find(|(threshold, _)| value >= *threshold)
            .map(|&(_, tag)| tag)
            .unwrap_or(self.floor)
    }

    pub fn rungs(&self) -> &'static [(f64, T)] {
        self.rungs
    }

    pub fn floor(&self) -> T {
        self.floor
    }
}

/// Predicate over the classifier input.
pub type Rule<I> = fn(&I) -> bool;

/// Ordered `(predicate, tag)` rules; the first predicate that holds decides.
pub struct RuleTable<I: 'static, T: 'static> {
    rules: &'static [(Rule<I>, T)],
}

impl<I: 'static, T: Copy + 'static> RuleTable<I, T> {
    pub const fn new(rules: &'static [(Rule<I>, T)]) -> Self {
        Self { rules }
    }

    /// Tag of the first matching rule, `None` when nothing matches.
    pub fn first_match(&self, input: &I) -> Option<T> {
        self.rules
            .iter()
            .find(|(rule, _)| rule(input))
            .map(|&(_, tag)| tag)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRADES: Ladder<char> = Ladder::new(&[(90.0, 'A'), (80.0, 'B'), (70.0, 'C')], 'F');

    #[test]
    fn ladder_first_rung_wins() {
        assert_eq!(GRADES.classify(95.0), 'A');
        assert_eq!(GRADES.classify(90.0), 'A');
        assert_eq!(GRADES.classify(89.99), 'B');
        assert_eq!(GRADES.classify(70.0), 'C');
        assert_eq!(GRADES.classify(69.0), 'F');
        assert_eq!(GRADES.classify(f64::NAN), 'F');
        assert_eq!(GRADES.rungs().len(), 3);
        assert_eq!(GRADES.floor(), 'F');
    }

    fn is_even(n: &i32) -> bool {
        n % 2 == 0
    }

    fn is_positive(n: &i32) -> bool {
        *n > 0
    }

    const RULES: &[(Rule<i32>, &str)] = &[(is_even, "even"), (is_positive, "positive")];

    #[test]
    fn rule_table_order_decides() {
        let table = RuleTable::new(RULES);
        assert_eq!(table.first_match(&4), Some("even"));
        assert_eq!(table.first_match(&3), Some("positive"));
        assert_eq!(table.first_match(&-3), None);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }
}
