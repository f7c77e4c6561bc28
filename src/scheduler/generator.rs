//! Exhaustive schedule generation.
//!
//! # Algorithm
//!
//! Conceptually: take the Cartesian product of the per-course section lists
//! (first course varying slowest) and keep every tuple in which
//! 1. each section satisfies the constraints, and
//! 2. every pair of sections is compatible.
//!
//! Two strategies produce the same schedules in the same order:
//!
//! - [`Strategy::Backtracking`] (default): filter each course's sections by the
//!   constraints, then extend partial schedules one course at a time,
//!   abandoning a branch as soon as the new section conflicts with one
//!   already chosen. Depth-first over courses in request order reproduces
//!   product order.
//! - [`Strategy::Exhaustive`]: walk every product tuple with an odometer and
//!   check it in full.
//!
//! # Complexity
//! Exhaustive: O(Π nᵢ · k²) for k courses with nᵢ sections each.
//! Backtracking has the same worst case but prunes every subtree below a
//! conflicting prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::ControlFlow;
use tracing::{debug, trace};

use super::GenerationSummary;
use crate::error::GenerationError;
use crate::models::{compatible, CourseCode, OfferedSection, ScheduleConstraints};

/// Candidate sections for one requested course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseGroup {
    /// Requested course.
    pub code: CourseCode,
    /// Sections in listing order. Empty if the fetch found nothing.
    pub sections: Vec<OfferedSection>,
}

impl CourseGroup {
    /// Creates a group.
    pub fn new(code: impl Into<CourseCode>, sections: Vec<OfferedSection>) -> Self {
        Self {
            code: code.into(),
            sections,
        }
    }
}

/// Input to one generation call: requested courses in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// One group per requested course, in request order.
    pub groups: Vec<CourseGroup>,
}

impl ScheduleRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a course and its candidate sections.
    pub fn with_course(mut self, code: impl Into<CourseCode>, sections: Vec<OfferedSection>) -> Self {
        self.groups.push(CourseGroup::new(code, sections));
        self
    }

    /// Number of candidate sections per course.
    pub fn group_sizes(&self) -> Vec<usize> {
        self.groups.iter().map(|g| g.sections.len()).collect()
    }
}

impl FromIterator<CourseGroup> for ScheduleRequest {
    fn from_iter<I: IntoIterator<Item = CourseGroup>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}

/// One accepted schedule: a section per requested course, in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleCandidate<'a> {
    /// Chosen sections, one per requested course, borrowed from the request.
    pub sections: Vec<&'a OfferedSection>,
}

impl<'a> ScheduleCandidate<'a> {
    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the schedule has no sections (only for an empty request).
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section unique ids, in request order.
    pub fn unique_ids(&self) -> Vec<&'a str> {
        self.sections.iter().map(|&s| s.unique_id.as_str()).collect()
    }

    /// Sum of credit hours.
    pub fn total_credits(&self) -> u32 {
        self.sections.iter().map(|s| u32::from(s.credits)).sum()
    }

    /// Renders the schedule; `verbose` includes full section detail.
    pub fn describe(&self, verbose: bool) -> String {
        let mut out = String::new();
        for (j, section) in self.sections.iter().enumerate() {
            out.push_str(&format!(" --------------- Course #{} ---------------\n", j + 1));
            if verbose {
                out.push_str(&format!("{section}\n"));
            } else {
                out.push_str(&format!(
                    "{} {} (#{})\n",
                    section.code, section.name, section.unique_id
                ));
            }
        }
        out
    }
}

impl fmt::Display for ScheduleCandidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(false))
    }
}

/// Output of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult<'a> {
    /// Accepted schedules, in product order.
    pub schedules: Vec<ScheduleCandidate<'a>>,
    /// Counts.
    pub summary: GenerationSummary,
}

impl GenerationResult<'_> {
    /// Renders every schedule with a numbered banner.
    pub fn describe(&self, verbose: bool) -> String {
        if self.schedules.is_empty() {
            return "No valid semester schedule found.\n".to_string();
        }
        let mut out = String::new();
        for (i, schedule) in self.schedules.iter().enumerate() {
            out.push_str(&format!(
                "***************** Valid Schedule #{} *****************\n",
                i + 1
            ));
            out.push_str(&schedule.describe(verbose));
            out.push_str("*****************************************************\n");
        }
        out
    }
}

/// Search strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Prune partial schedules at the first conflict.
    #[default]
    Backtracking,
    /// Check every product tuple in full.
    Exhaustive,
}

/// Enumerates every valid schedule for a request.
///
/// Holds no state between calls; inputs are borrowed and results point
/// into the request.
///
/// # Example
///
/// ```
/// use semester_scheduler::models::{Day, LocationMeetings, Meeting, OfferedSection, ScheduleConstraints};
/// use semester_scheduler::scheduler::{ScheduleGenerator, ScheduleRequest};
///
/// let meets = |id: &str, start: &str, end: &str| {
///     OfferedSection::new("COP 4600", id).with_location(
///         LocationMeetings::new("CSE E116")
///             .with_meeting(&[Day::Monday], Meeting::parse(start, end).unwrap()),
///     )
/// };
/// let request = ScheduleRequest::new()
///     .with_course("COP 4600", vec![meets("B", "1040", "1130"), meets("A", "0830", "0935")])
///     .with_course("MAC 2313", vec![
///         OfferedSection::new("MAC 2313", "C").with_location(
///             LocationMeetings::new("LIT 0109")
///                 .with_meeting(&[Day::Monday], Meeting::parse("0900", "1000").unwrap()),
///         ),
///     ]);
///
/// let result = ScheduleGenerator::new().generate(&request, &ScheduleConstraints::new());
/// assert_eq!(result.schedules.len(), 1);
/// assert_eq!(result.schedules[0].unique_ids(), vec!["B", "C"]);
/// assert_eq!(result.summary.total_considered, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    strategy: Strategy,
}

impl ScheduleGenerator {
    /// Creates a generator using backtracking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Generates every valid schedule.
    pub fn generate<'a>(
        &self,
        request: &'a ScheduleRequest,
        constraints: &ScheduleConstraints,
    ) -> GenerationResult<'a> {
        let mut search = Search::new(constraints, None);
        // without a stop predicate the search always runs to completion
        let _ = self.run(&mut search, request);
        search.finish(request)
    }

    /// Generates every valid schedule, polling `should_stop` between
    /// candidate evaluations.
    ///
    /// Returns [`GenerationError::Cancelled`] as soon as `should_stop`
    /// returns true; partial results are discarded.
    pub fn generate_with_cancel<'a>(
        &self,
        request: &'a ScheduleRequest,
        constraints: &ScheduleConstraints,
        should_stop: &dyn Fn() -> bool,
    ) -> Result<GenerationResult<'a>, GenerationError> {
        let mut search = Search::new(constraints, Some(should_stop));
        match self.run(&mut search, request) {
            ControlFlow::Continue(()) => Ok(search.finish(request)),
            ControlFlow::Break(()) => {
                debug!(explored = search.explored, "schedule generation cancelled");
                Err(GenerationError::Cancelled {
                    explored: search.explored,
                })
            }
        }
    }

    fn run<'a>(&self, search: &mut Search<'a, '_>, request: &'a ScheduleRequest) -> ControlFlow<()> {
        debug!(
            courses = request.groups.len(),
            group_sizes = ?request.group_sizes(),
            strategy = ?self.strategy,
            "generating semester schedules"
        );
        match self.strategy {
            Strategy::Backtracking => search.backtrack(request),
            Strategy::Exhaustive => search.exhaustive(request),
        }
    }
}

/// Generates every valid schedule with the default strategy.
pub fn generate_schedules<'a>(
    request: &'a ScheduleRequest,
    constraints: &ScheduleConstraints,
) -> GenerationResult<'a> {
    ScheduleGenerator::new().generate(request, constraints)
}

/// Per-call search state.
struct Search<'a, 'c> {
    constraints: &'c ScheduleConstraints,
    should_stop: Option<&'c dyn Fn() -> bool>,
    explored: u64,
    accepted: Vec<ScheduleCandidate<'a>>,
}

impl<'a, 'c> Search<'a, 'c> {
    fn new(constraints: &'c ScheduleConstraints, should_stop: Option<&'c dyn Fn() -> bool>) -> Self {
        Self {
            constraints,
            should_stop,
            explored: 0,
            accepted: Vec::new(),
        }
    }

    /// Counts one candidate evaluation, honoring the stop signal first.
    fn tick(&mut self) -> ControlFlow<()> {
        if self.should_stop.is_some_and(|stop| stop()) {
            return ControlFlow::Break(());
        }
        self.explored += 1;
        ControlFlow::Continue(())
    }

    fn finish(self, request: &ScheduleRequest) -> GenerationResult<'a> {
        let summary = GenerationSummary::calculate(&request.group_sizes(), self.accepted.len());
        debug!(
            total = summary.total_considered,
            accepted = summary.accepted,
            explored = self.explored,
            "schedule generation finished"
        );
        GenerationResult {
            schedules: self.accepted,
            summary,
        }
    }

    fn backtrack(&mut self, request: &'a ScheduleRequest) -> ControlFlow<()> {
        let mut admitted: Vec<Vec<&'a OfferedSection>> = Vec::with_capacity(request.groups.len());
        for group in &request.groups {
            let mut sections = Vec::with_capacity(group.sections.len());
            for section in &group.sections {
                self.tick()?;
                match self.constraints.check(section) {
                    Ok(()) => sections.push(section),
                    Err(reason) => {
                        trace!(code = %section.code, id = %section.unique_id, %reason, "section rejected")
                    }
                }
            }
            admitted.push(sections);
        }

        let mut chosen = Vec::with_capacity(admitted.len());
        self.extend(&admitted, &mut chosen)
    }

    fn extend(
        &mut self,
        admitted: &[Vec<&'a OfferedSection>],
        chosen: &mut Vec<&'a OfferedSection>,
    ) -> ControlFlow<()> {
        let Some(options) = admitted.get(chosen.len()) else {
            self.accepted.push(ScheduleCandidate {
                sections: chosen.clone(),
            });
            return ControlFlow::Continue(());
        };

        for &section in options {
            self.tick()?;
            if let Some(conflict) = chosen.iter().find(|c| !compatible(c, section)) {
                trace!(
                    id = %section.unique_id,
                    conflicts_with = %conflict.unique_id,
                    "time conflict"
                );
                continue;
            }
            chosen.push(section);
            self.extend(admitted, chosen)?;
            chosen.pop();
        }
        ControlFlow::Continue(())
    }

    fn exhaustive(&mut self, request: &'a ScheduleRequest) -> ControlFlow<()> {
        let groups: Vec<&'a [OfferedSection]> =
            request.groups.iter().map(|g| g.sections.as_slice()).collect();
        if groups.iter().any(|g| g.is_empty()) {
            return ControlFlow::Continue(());
        }

        // odometer over section indices, last course turning fastest
        let mut indices = vec![0usize; groups.len()];
        loop {
            self.tick()?;
            let tuple: Vec<&'a OfferedSection> = groups
                .iter()
                .zip(&indices)
                .map(|(&sections, &i)| &sections[i])
                .collect();
            if self.is_valid(&tuple) {
                self.accepted.push(ScheduleCandidate { sections: tuple });
            }

            let mut pos = groups.len();
            loop {
                if pos == 0 {
                    return ControlFlow::Continue(());
                }
                pos -= 1;
                indices[pos] += 1;
                if indices[pos] < groups[pos].len() {
                    break;
                }
                indices[pos] = 0;
            }
        }
    }

    fn is_valid(&self, tuple: &[&OfferedSection]) -> bool {
        tuple.iter().all(|s| self.constraints.admits(s))
            && tuple.iter().enumerate().all(|(i, a)| {
                tuple[i + 1..].iter().all(|b| compatible(a, b))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockTime, Day, LocationMeetings, Meeting, Metric};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cell::Cell;

    fn meets(code: &str, id: &str, days: &[Day], start: &str, end: &str) -> OfferedSection {
        OfferedSection::new(code, id).with_location(
            LocationMeetings::new("CSE E116").with_meeting(days, Meeting::parse(start, end).unwrap()),
        )
    }

    fn ids(result: &GenerationResult<'_>) -> Vec<Vec<String>> {
        result
            .schedules
            .iter()
            .map(|s| s.unique_ids().into_iter().map(String::from).collect())
            .collect()
    }

    fn both_strategies(
        request: &ScheduleRequest,
        constraints: &ScheduleConstraints,
    ) -> Vec<Vec<String>> {
        let fast = ScheduleGenerator::new().generate(request, constraints);
        let slow = ScheduleGenerator::new()
            .with_strategy(Strategy::Exhaustive)
            .generate(request, constraints);
        assert_eq!(ids(&fast), ids(&slow));
        assert_eq!(fast.summary, slow.summary);
        ids(&fast)
    }

    fn scenario_request() -> ScheduleRequest {
        let mw = [Day::Monday, Day::Wednesday];
        ScheduleRequest::new()
            .with_course(
                "COP 4600",
                vec![
                    meets("COP 4600", "B", &[Day::Tuesday], "0830", "0935"),
                    meets("COP 4600", "A", &mw, "0830", "0935"),
                ],
            )
            .with_course(
                "MAC 2313",
                vec![meets("MAC 2313", "C", &[Day::Monday], "0900", "1000")],
            )
    }

    #[test]
    fn test_two_course_scenario() {
        let request = scenario_request();
        let result = generate_schedules(&request, &ScheduleConstraints::new());
        assert_eq!(ids(&result), vec![vec!["B", "C"]]);
        assert_eq!(result.summary.total_considered, 2);
        assert_eq!(result.summary.accepted, 1);
        assert!((result.summary.acceptance_percent().unwrap() - 50.0).abs() < 1e-10);
        both_strategies(&request, &ScheduleConstraints::new());
    }

    #[test]
    fn test_empty_group_yields_nothing() {
        let request = scenario_request().with_course("PHY 2049", vec![]);
        for strategy in [Strategy::Backtracking, Strategy::Exhaustive] {
            let result = ScheduleGenerator::new()
                .with_strategy(strategy)
                .generate(&request, &ScheduleConstraints::new());
            assert!(result.schedules.is_empty());
            assert_eq!(result.summary.total_considered, 0);
            assert_eq!(result.summary.acceptance_percent(), None);
        }
    }

    #[test]
    fn test_empty_request_is_empty_product() {
        let request = ScheduleRequest::new();
        let result = generate_schedules(&request, &ScheduleConstraints::new());
        assert_eq!(result.schedules.len(), 1);
        assert!(result.schedules[0].is_empty());
        assert_eq!(result.summary.total_considered, 1);
        both_strategies(&request, &ScheduleConstraints::new());
    }

    #[test]
    fn test_product_order_first_course_slowest() {
        let online = |code: &str, id: &str| OfferedSection::new(code, id);
        let request = ScheduleRequest::new()
            .with_course("AAA 1000", vec![online("AAA 1000", "a1"), online("AAA 1000", "a2")])
            .with_course("BBB 1000", vec![online("BBB 1000", "b1"), online("BBB 1000", "b2")])
            .with_course("CCC 1000", vec![online("CCC 1000", "c1"), online("CCC 1000", "c2")]);
        let got = both_strategies(&request, &ScheduleConstraints::new());
        assert_eq!(got.len(), 8);
        assert_eq!(got[0], vec!["a1", "b1", "c1"]);
        assert_eq!(got[1], vec!["a1", "b1", "c2"]);
        assert_eq!(got[2], vec!["a1", "b2", "c1"]);
        assert_eq!(got[7], vec!["a2", "b2", "c2"]);
    }

    #[test]
    fn test_constraints_applied_per_section() {
        let request = scenario_request();
        let constraints = ScheduleConstraints::new().with_day_blackout(Day::Tuesday);
        let got = both_strategies(&request, &constraints);
        // B is on Tuesday, A conflicts with C
        assert!(got.is_empty());

        let result = generate_schedules(&request, &constraints);
        assert_eq!(result.summary.total_considered, 2);
        assert_eq!(result.summary.accepted, 0);
    }

    #[test]
    fn test_three_way_conflict_pruned() {
        let request = ScheduleRequest::new()
            .with_course("AAA 1000", vec![meets("AAA 1000", "a", &[Day::Friday], "1040", "1130")])
            .with_course("BBB 1000", vec![meets("BBB 1000", "b", &[Day::Monday], "1040", "1130")])
            .with_course(
                "CCC 1000",
                vec![
                    meets("CCC 1000", "c1", &[Day::Friday], "1100", "1200"),
                    meets("CCC 1000", "c2", &[Day::Friday], "1145", "1235"),
                ],
            );
        assert_eq!(
            both_strategies(&request, &ScheduleConstraints::new()),
            vec![vec!["a", "b", "c2"]]
        );
    }

    #[test]
    fn test_cancellation() {
        let request = scenario_request();
        let calls = Cell::new(0u32);
        let stop_after_first = || {
            calls.set(calls.get() + 1);
            calls.get() > 1
        };
        for strategy in [Strategy::Backtracking, Strategy::Exhaustive] {
            calls.set(0);
            let err = ScheduleGenerator::new()
                .with_strategy(strategy)
                .generate_with_cancel(&request, &ScheduleConstraints::new(), &stop_after_first)
                .unwrap_err();
            assert_eq!(err, GenerationError::Cancelled { explored: 1 });
        }
    }

    #[test]
    fn test_no_cancel_matches_generate() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut requests = vec![scenario_request(), ScheduleRequest::new()];
        requests.extend((0..20).map(|_| random_request(&mut rng)));
        for strategy in [Strategy::Backtracking, Strategy::Exhaustive] {
            let generator = ScheduleGenerator::new().with_strategy(strategy);
            for request in &requests {
                let plain = generator.generate(request, &ScheduleConstraints::new());
                let polled = generator
                    .generate_with_cancel(request, &ScheduleConstraints::new(), &|| false)
                    .unwrap();
                assert_eq!(plain, polled);
            }
        }
        let result = generate_schedules(&requests[0], &ScheduleConstraints::new());
        assert_eq!(ids(&result), vec![vec!["B", "C"]]);
    }

    #[test]
    fn test_describe() {
        let request = scenario_request();
        let result = generate_schedules(&request, &ScheduleConstraints::new());
        let text = result.describe(false);
        assert!(text.contains("Valid Schedule #1"));
        assert!(text.contains("COP 4600  (#B)"));
        assert!(result.describe(true).contains("Final exam: N/A"));

        let empty = ScheduleRequest::new().with_course("COP 4600", vec![]);
        let none = generate_schedules(&empty, &ScheduleConstraints::new());
        assert_eq!(none.describe(false), "No valid semester schedule found.\n");
    }

    #[test]
    fn test_total_credits() {
        let request = ScheduleRequest::new()
            .with_course("COP 4600", vec![OfferedSection::new("COP 4600", "1").with_credits(3)])
            .with_course("MAC 2313", vec![OfferedSection::new("MAC 2313", "2").with_credits(4)]);
        let result = generate_schedules(&request, &ScheduleConstraints::new());
        assert_eq!(result.schedules[0].total_credits(), 7);
    }

    // ---- randomized properties ----

    fn random_metric(rng: &mut StdRng, low: u8, high: u8, scale: f64) -> Metric {
        if rng.random_bool(0.2) {
            Metric::NotAvailable
        } else {
            Metric::Value(f64::from(rng.random_range(low..=high)) / scale)
        }
    }

    fn random_section(rng: &mut StdRng, code: &str, id: usize) -> OfferedSection {
        let rating = random_metric(rng, 10, 50, 10.0);
        let difficulty = random_metric(rng, 10, 50, 10.0);
        let again = random_metric(rng, 0, 100, 1.0);
        let mut section = OfferedSection::new(code, id.to_string())
            .with_instructor("Staff", rating)
            .with_feedback(difficulty, again);
        let blocks = rng.random_range(0..=2);
        for b in 0..blocks {
            let day_count = rng.random_range(1..=3);
            let days: Vec<Day> = (0..day_count)
                .map(|_| Day::ALL[rng.random_range(0..5usize)])
                .collect();
            let start_hour = rng.random_range(7u8..=18);
            let start = ClockTime::new(start_hour, [0, 25, 30, 35, 40, 45, 50, 55][rng.random_range(0..8usize)]).unwrap();
            let end = ClockTime::new(start_hour + rng.random_range(1u8..=2), 0).unwrap();
            section = section
                .with_location(LocationMeetings::new(format!("R{b}")).with_meeting(&days, Meeting::new(start, end)));
        }
        section
    }

    fn random_request(rng: &mut StdRng) -> ScheduleRequest {
        let courses = rng.random_range(1..=4);
        let mut next_id = 0;
        (0..courses)
            .map(|c| {
                let code = format!("ABC {}", 1000 + c);
                let count = rng.random_range(0..=4);
                let sections = (0..count)
                    .map(|_| {
                        next_id += 1;
                        random_section(rng, &code, next_id)
                    })
                    .collect();
                CourseGroup::new(code.as_str(), sections)
            })
            .collect()
    }

    /// Reference: full product, filtered, in product order.
    fn brute_force(request: &ScheduleRequest, constraints: &ScheduleConstraints) -> Vec<Vec<String>> {
        let mut tuples: Vec<Vec<&OfferedSection>> = vec![vec![]];
        for group in &request.groups {
            tuples = tuples
                .into_iter()
                .flat_map(|prefix| {
                    group.sections.iter().map(move |s| {
                        let mut t = prefix.clone();
                        t.push(s);
                        t
                    })
                })
                .collect();
        }
        tuples
            .into_iter()
            .filter(|t| {
                t.iter().all(|s| constraints.admits(s))
                    && t.iter()
                        .enumerate()
                        .all(|(i, a)| t.iter().skip(i + 1).all(|b| compatible(a, b)))
            })
            .map(|t| t.iter().map(|s| s.unique_id.clone()).collect())
            .collect()
    }

    #[test]
    fn test_random_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let request = random_request(&mut rng);
            let constraints = if rng.random_bool(0.5) {
                ScheduleConstraints::new()
            } else {
                ScheduleConstraints::new()
                    .with_earliest_time(ClockTime::new(8, 0).unwrap())
                    .with_min_instructor_rating(2.5)
            };
            let expected = brute_force(&request, &constraints);
            assert_eq!(both_strategies(&request, &constraints), expected);

            let result = generate_schedules(&request, &constraints);
            let product: u64 = request.group_sizes().iter().map(|&n| n as u64).product();
            assert_eq!(result.summary.total_considered, product);
            assert_eq!(result.summary.accepted as usize, expected.len());
        }
    }

    #[test]
    fn test_random_compatibility_symmetric() {
        let mut rng = StdRng::seed_from_u64(7);
        for i in 0..500 {
            let a = random_section(&mut rng, "AAA 1000", i);
            let b = random_section(&mut rng, "BBB 1000", i);
            assert_eq!(compatible(&a, &b), compatible(&b, &a));
        }
    }

    /// Sequences of constraint sets, each at least as strict as the one before.
    fn tightening_chains() -> Vec<Vec<ScheduleConstraints>> {
        let base = ScheduleConstraints::new;
        let at = |hour: u8| ClockTime::new(hour, 0).unwrap();
        let periods = ["Period 2", "Period 4", "Period 8"];
        vec![
            [0.0, 2.0, 3.0, 4.0, 5.1]
                .into_iter()
                .map(|min| base().with_min_instructor_rating(min))
                .collect(),
            std::iter::once(base())
                .chain([7, 9, 11, 14].into_iter().map(|h| base().with_earliest_time(at(h))))
                .collect(),
            std::iter::once(base())
                .chain([21, 18, 15, 11].into_iter().map(|h| base().with_latest_time(at(h))))
                .collect(),
            std::iter::once(base())
                .chain([5.0, 4.0, 3.0, 1.0].into_iter().map(|max| base().with_max_level_of_difficulty(max)))
                .collect(),
            std::iter::once(base())
                .chain([0.0, 20.0, 50.0, 90.0].into_iter().map(|min| base().with_min_would_take_again(min)))
                .collect(),
            (0..=4usize)
                .map(|n| Day::ALL[..n].iter().fold(base(), |c, &day| c.with_day_blackout(day)))
                .collect(),
            (0..=periods.len())
                .map(|n| periods[..n].iter().fold(base(), |c, &p| c.with_period_blackout(p)))
                .collect(),
        ]
    }

    #[test]
    fn test_random_tightening_is_monotone() {
        let mut rng = StdRng::seed_from_u64(1234);
        let chains = tightening_chains();
        for _ in 0..60 {
            let request = random_request(&mut rng);
            for chain in &chains {
                let mut previous: Option<Vec<Vec<String>>> = None;
                for constraints in chain {
                    let got = ids(&generate_schedules(&request, constraints));
                    if let Some(prev) = &previous {
                        assert!(got.iter().all(|s| prev.contains(s)), "{constraints:?}");
                    }
                    previous = Some(got);
                }
            }
        }
    }

    #[test]
    fn test_tightening_chains_reject_something() {
        // every chain's strictest step rejects at least one section somewhere
        let mut rng = StdRng::seed_from_u64(99);
        let sections: Vec<OfferedSection> = (0..1000)
            .map(|i| random_section(&mut rng, "ABC 1000", i))
            .collect();
        for chain in tightening_chains() {
            let strictest = chain.last().unwrap();
            assert!(sections.iter().any(|s| !strictest.admits(s)), "{strictest:?}");
        }
    }
}
