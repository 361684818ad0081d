//! Dynamic construction of the property search statement.
//!
//! Search criteria are an arbitrary subset of optional filters, so the
//! WHERE/AND structure, parameter order, and placeholder numbering of the
//! statement all depend on which filters are present. [`PlanBuilder`] keeps
//! the clause text and the bound values in one accumulator so the two can
//! never drift apart.

use domain::{PropertyFilters, MINOR_UNITS_PER_MAJOR};
use sea_orm::Value;

/// A parameterized statement ready for execution: positional placeholders
/// `$1..$n` in `sql`, with `values[n - 1]` bound to placeholder `$n`.
///
/// Built fresh per invocation and owned by the caller that requested it.
#[derive(Debug, Clone)]
pub struct QueryPlan {
    pub sql: String,
    pub values: Vec<Value>,
}

/// Accumulator for one statement: clause fragments plus the ordered value
/// list. Ordinals are 1-indexed and assigned in bind order, never reused or
/// skipped.
///
/// A single `filtered` marker spans all optional predicates: whichever
/// filter is first-present introduces the `WHERE`, every later one gets
/// `AND`. Post-aggregation clauses (`HAVING`, `LIMIT`) bypass the marker and
/// go through [`PlanBuilder::bind`] + [`PlanBuilder::push`] directly.
#[derive(Debug)]
pub struct PlanBuilder {
    sql: String,
    values: Vec<Value>,
    filtered: bool,
}

impl PlanBuilder {
    /// Start from a base statement with no placeholders.
    pub fn new(base: &str) -> Self {
        Self {
            sql: base.to_string(),
            values: Vec::new(),
            filtered: false,
        }
    }

    /// Append a value and return its 1-based placeholder ordinal.
    pub fn bind(&mut self, value: impl Into<Value>) -> usize {
        self.values.push(value.into());
        self.values.len()
    }

    /// Bind `value` and append the row predicate produced by `clause`,
    /// introduced with `WHERE` on first use and `AND` thereafter.
    pub fn filter<F>(&mut self, value: impl Into<Value>, clause: F)
    where
        F: FnOnce(usize) -> String,
    {
        let ordinal = self.bind(value);
        let keyword = if self.filtered { "AND" } else { "WHERE" };
        self.filtered = true;
        self.sql.push(' ');
        self.sql.push_str(keyword);
        self.sql.push(' ');
        self.sql.push_str(&clause(ordinal));
    }

    /// Append a parameterless clause fragment.
    pub fn push(&mut self, clause: &str) {
        self.sql.push(' ');
        self.sql.push_str(clause);
    }

    /// Finish the statement.
    pub fn finish(self) -> QueryPlan {
        QueryPlan {
            sql: self.sql,
            values: self.values,
        }
    }
}

/// Build the aggregate search statement over properties joined with their
/// reviews. Pure construction: deterministic for a given input, performs no
/// I/O, and cannot fail. Absent filters contribute no clause and no value.
pub fn search_plan(filters: &PropertyFilters, limit: u64) -> QueryPlan {
    let mut plan = PlanBuilder::new(
        "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating \
         FROM properties \
         JOIN property_reviews ON properties.id = property_reviews.property_id",
    );

    if let Some(city) = &filters.city {
        plan.filter(format!("%{city}%"), |n| {
            format!("LOWER(city) LIKE LOWER(${n})")
        });
    }
    // Nightly costs are stored in cents; the bounds arrive in whole dollars,
    // so the stored value is divided down at query time.
    if let Some(minimum) = filters.minimum_price_per_night {
        plan.filter(minimum, |n| {
            format!("properties.cost_per_night / {MINOR_UNITS_PER_MAJOR} >= ${n}")
        });
    }
    if let Some(maximum) = filters.maximum_price_per_night {
        plan.filter(maximum, |n| {
            format!("properties.cost_per_night / {MINOR_UNITS_PER_MAJOR} <= ${n}")
        });
    }

    // Required unconditionally by the aggregate in the select list.
    plan.push("GROUP BY properties.id");

    // Rating filters post-aggregation, so it must stay out of the WHERE/AND
    // chain above.
    if let Some(rating) = filters.minimum_rating {
        let ordinal = plan.bind(rating);
        plan.push(&format!("HAVING avg(rating) >= ${ordinal}"));
    }

    let ordinal = plan.bind(limit as i64);
    plan.push(&format!("ORDER BY cost_per_night LIMIT ${ordinal}"));

    plan.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(
        city: Option<&str>,
        min_price: Option<i64>,
        max_price: Option<i64>,
        min_rating: Option<i32>,
    ) -> PropertyFilters {
        PropertyFilters {
            city: city.map(str::to_string),
            minimum_price_per_night: min_price,
            maximum_price_per_night: max_price,
            minimum_rating: min_rating,
        }
    }

    /// Every `$n` in the text must reference an existing value, with no gaps
    /// or duplicates across 1..=len.
    fn assert_placeholders_in_sync(plan: &QueryPlan) {
        let mut seen = vec![false; plan.values.len()];
        for (idx, _) in plan.sql.match_indices('$') {
            let digits: String = plan.sql[idx + 1..]
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            let ordinal: usize = digits.parse().expect("placeholder without ordinal");
            assert!(
                ordinal >= 1 && ordinal <= plan.values.len(),
                "placeholder ${ordinal} out of range for {} values",
                plan.values.len()
            );
            seen[ordinal - 1] = true;
        }
        assert!(seen.iter().all(|s| *s), "unreferenced bound value");
    }

    #[test]
    fn no_filters_yields_unfiltered_limited_listing() {
        let plan = search_plan(&PropertyFilters::default(), 10);

        assert!(!plan.sql.contains("WHERE"));
        assert!(!plan.sql.contains("HAVING"));
        assert!(plan.sql.contains("GROUP BY properties.id"));
        assert!(plan.sql.ends_with("ORDER BY cost_per_night LIMIT $1"));
        assert_eq!(plan.values, vec![Value::from(10i64)]);
    }

    #[test]
    fn city_filter_introduces_where() {
        let plan = search_plan(&filters(Some("Berlin"), None, None, None), 10);

        assert!(plan.sql.contains("WHERE LOWER(city) LIKE LOWER($1)"));
        assert_eq!(
            plan.values,
            vec![Value::from("%Berlin%"), Value::from(10i64)]
        );
    }

    #[test]
    fn price_bounds_share_the_where_and_chain() {
        let plan = search_plan(&filters(None, Some(50), Some(200), None), 5);

        assert!(plan.sql.contains("WHERE properties.cost_per_night / 100 >= $1"));
        assert!(plan.sql.contains("AND properties.cost_per_night / 100 <= $2"));
        assert_eq!(
            plan.values,
            vec![Value::from(50i64), Value::from(200i64), Value::from(5i64)]
        );
    }

    #[test]
    fn rating_filter_emits_having_after_group_by() {
        let plan = search_plan(&filters(Some("Rome"), None, None, Some(4)), 10);

        assert!(plan.sql.contains("WHERE LOWER(city) LIKE LOWER($1)"));
        let group_by = plan.sql.find("GROUP BY properties.id").unwrap();
        let having = plan.sql.find("HAVING avg(rating) >= $2").unwrap();
        assert!(having > group_by);
        assert_eq!(
            plan.values,
            vec![
                Value::from("%Rome%"),
                Value::from(4i32),
                Value::from(10i64)
            ]
        );
    }

    #[test]
    fn rating_never_joins_the_predicate_chain() {
        // Rating alone must not produce a WHERE.
        let plan = search_plan(&filters(None, None, None, Some(3)), 10);

        assert!(!plan.sql.contains("WHERE"));
        assert!(!plan.sql.contains("AND"));
        assert!(plan.sql.contains("HAVING avg(rating) >= $1"));
    }

    #[test]
    fn first_present_filter_gets_where_for_every_subset() {
        for mask in 0u8..8 {
            let criteria = PropertyFilters {
                city: (mask & 1 != 0).then(|| "van".to_string()),
                minimum_price_per_night: (mask & 2 != 0).then_some(30),
                maximum_price_per_night: (mask & 4 != 0).then_some(150),
                minimum_rating: None,
            };
            let expected_predicates = mask.count_ones() as usize;

            let plan = search_plan(&criteria, 10);

            assert_eq!(
                plan.sql.matches("WHERE").count(),
                usize::from(expected_predicates > 0),
                "subset {mask:#05b}"
            );
            assert_eq!(
                plan.sql.matches(" AND ").count(),
                expected_predicates.saturating_sub(1),
                "subset {mask:#05b}"
            );
            // One value per present filter plus the trailing limit.
            assert_eq!(plan.values.len(), expected_predicates + 1);
            assert_placeholders_in_sync(&plan);
        }
    }

    #[test]
    fn limit_is_always_the_final_value_and_clause() {
        for criteria in [
            PropertyFilters::default(),
            filters(Some("van"), Some(10), Some(90), Some(4)),
        ] {
            let plan = search_plan(&criteria, 7);

            let last = plan.values.len();
            assert!(plan.sql.ends_with(&format!("LIMIT ${last}")));
            assert_eq!(plan.values.last(), Some(&Value::from(7i64)));
            assert_placeholders_in_sync(&plan);
        }
    }

    #[test]
    fn group_by_is_unconditional() {
        for criteria in [
            PropertyFilters::default(),
            filters(Some("van"), None, None, None),
            filters(None, None, None, Some(2)),
            filters(Some("van"), Some(10), Some(90), Some(4)),
        ] {
            let plan = search_plan(&criteria, 10);
            assert_eq!(plan.sql.matches("GROUP BY properties.id").count(), 1);
        }
    }

    #[test]
    fn zero_bounds_are_present_constraints() {
        // A present zero is a real bound, not an absent filter.
        let plan = search_plan(&filters(None, Some(0), None, Some(0)), 10);

        assert!(plan.sql.contains("WHERE properties.cost_per_night / 100 >= $1"));
        assert!(plan.sql.contains("HAVING avg(rating) >= $2"));
        assert_eq!(plan.values.len(), 3);
    }

    #[test]
    fn full_criteria_orders_parameters_by_evaluation_order() {
        let plan = search_plan(&filters(Some("van"), Some(30), Some(150), Some(4)), 10);

        assert!(plan.sql.contains("WHERE LOWER(city) LIKE LOWER($1)"));
        assert!(plan.sql.contains("AND properties.cost_per_night / 100 >= $2"));
        assert!(plan.sql.contains("AND properties.cost_per_night / 100 <= $3"));
        assert!(plan.sql.contains("HAVING avg(rating) >= $4"));
        assert!(plan.sql.ends_with("ORDER BY cost_per_night LIMIT $5"));
        assert_eq!(
            plan.values,
            vec![
                Value::from("%van%"),
                Value::from(30i64),
                Value::from(150i64),
                Value::from(4i32),
                Value::from(10i64),
            ]
        );
    }
}
