//! Greedy multi-stop route planner.
//!
//! Given a start coordinate and an ordered plan of categories, repeatedly
//! picks the globally nearest stop among the nearest unvisited place of
//! each still-uncovered category. This approximates a short tour; it makes
//! no attempt at optimality and never backtracks.

use std::collections::{BTreeMap, HashSet};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cancel::CancellationToken;
use crate::error::{PlanError, PlanFailure};
use crate::model::RoutePoint;
use crate::polyline::Polyline;
use crate::traits::{CategoryOf, DistanceMetric, PlaceRepository, PointOfInterest};

/// How repeated category ids in a plan populate the uncovered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateCategoryPolicy {
    /// Treat the plan as a set: each distinct category yields at most one stop.
    #[default]
    Collapse,
    /// Every occurrence is its own slot: `[1, 1]` asks for two places of category 1.
    Repeat,
}

/// What to do when an uncovered category has no unvisited place left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustedCategoryPolicy {
    /// Drop the category, record it as unsatisfied and keep planning.
    #[default]
    Skip,
    /// Stop and return the partial route with `PlanError::NoCandidateFound`.
    Terminate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanOptions {
    pub duplicate_categories: DuplicateCategoryPolicy,
    pub exhausted_categories: ExhaustedCategoryPolicy,
    /// Query the repository for all uncovered categories of an iteration
    /// concurrently. Output is identical either way.
    pub parallel_lookups: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            duplicate_categories: DuplicateCategoryPolicy::Collapse,
            exhausted_categories: ExhaustedCategoryPolicy::Skip,
            parallel_lookups: false,
        }
    }
}

/// A single stop on a planned route.
#[derive(Debug, Clone)]
pub struct RouteStop<P: PointOfInterest> {
    pub place: P,
    /// The category that nominated this place.
    pub category: P::CategoryId,
    /// Distance from the previous position (or the start) under the metric used.
    pub distance: f64,
}

#[derive(Debug, Clone)]
pub struct PlannedRoute<P: PointOfInterest> {
    pub start: (f64, f64),
    pub stops: Vec<RouteStop<P>>,
    /// Categories dropped because they had no unvisited place.
    pub unsatisfied: Vec<P::CategoryId>,
    /// Scheduled iterations (always the plan length).
    pub iterations: usize,
    /// Scheduled iterations that produced no stop.
    pub idle_iterations: usize,
}

impl<P: PointOfInterest> PlannedRoute<P> {
    fn new(start: (f64, f64), iterations: usize) -> Self {
        Self {
            start,
            stops: Vec::new(),
            unsatisfied: Vec::new(),
            iterations,
            idle_iterations: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn places(&self) -> impl Iterator<Item = &P> {
        self.stops.iter().map(|stop| &stop.place)
    }

    pub fn into_places(self) -> Vec<P> {
        self.stops.into_iter().map(|stop| stop.place).collect()
    }

    pub fn place_ids(&self) -> Vec<P::Id> {
        self.places().map(|place| place.id().clone()).collect()
    }

    /// Where the route currently ends: the last stop, or the start.
    pub fn end_position(&self) -> (f64, f64) {
        self.stops
            .last()
            .map(|stop| stop.place.location())
            .unwrap_or(self.start)
    }

    pub fn total_distance(&self) -> f64 {
        self.stops.iter().map(|stop| stop.distance).sum()
    }

    /// Rows for persisting this route, numbered from 1.
    pub fn route_points(&self) -> Vec<RoutePoint<P::Id>> {
        self.places()
            .enumerate()
            .map(|(index, place)| RoutePoint {
                place_id: place.id().clone(),
                sequence_number: index + 1,
            })
            .collect()
    }

    /// Path geometry from the start through every stop.
    pub fn polyline(&self) -> Polyline {
        let mut points = Vec::with_capacity(self.stops.len() + 1);
        points.push(self.start);
        points.extend(self.places().map(|place| place.location()));
        Polyline::new(points)
    }
}

pub type PlanResult<P> = Result<
    PlannedRoute<P>,
    PlanFailure<PlannedRoute<P>, <P as PointOfInterest>::CategoryId>,
>;

/// Plan a route from `start` covering the categories in `plan`.
///
/// Runs exactly `plan.len()` iterations. Each one queries every uncovered
/// category, takes the nearest unvisited place per category, and appends
/// the nearest of those. Ties go to the lowest category id, then to
/// repository order. Iterations with nothing left to cover are idle.
pub fn plan_route<R, M>(
    start: (f64, f64),
    plan: &[CategoryOf<R>],
    repository: &R,
    metric: &M,
    options: &PlanOptions,
    cancel: &CancellationToken,
) -> PlanResult<R::Place>
where
    R: PlaceRepository + Sync,
    R::Place: Send,
    <R::Place as PointOfInterest>::Id: Sync,
    CategoryOf<R>: Send + Sync,
    M: DistanceMetric + Sync,
{
    let mut route = PlannedRoute::new(start, plan.len());

    if plan.is_empty() {
        return Err(PlanFailure::new(
            PlanError::InvalidInput("category plan is empty".to_string()),
            route,
        ));
    }
    if !is_finite(start) {
        return Err(PlanFailure::new(
            PlanError::InvalidInput(format!("start coordinate {:?} is not finite", start)),
            route,
        ));
    }

    let mut remaining = remaining_categories(plan, options.duplicate_categories);
    let mut visited: HashSet<<R::Place as PointOfInterest>::Id> = HashSet::new();
    let mut position = start;

    info!(
        categories = plan.len(),
        distinct = remaining.len(),
        "planning route"
    );

    for iteration in 0..plan.len() {
        if cancel.is_cancelled() {
            return Err(PlanFailure::new(PlanError::Cancelled, route));
        }

        if remaining.is_empty() {
            debug!(iteration, "every category covered, idle iteration");
            route.idle_iterations += 1;
            continue;
        }

        let categories: Vec<CategoryOf<R>> = remaining.keys().cloned().collect();
        let lookups = match lookup_candidates(
            &categories,
            position,
            repository,
            metric,
            &visited,
            options.parallel_lookups,
            cancel,
        ) {
            Ok(lookups) => lookups,
            Err(error) => return Err(PlanFailure::new(error, route)),
        };

        let mut winner: Option<RouteStop<R::Place>> = None;
        for (category, candidate) in lookups {
            match candidate {
                Some(candidate) => {
                    let closer = winner
                        .as_ref()
                        .map_or(true, |best| candidate.distance < best.distance);
                    if closer {
                        winner = Some(candidate);
                    }
                }
                None => match options.exhausted_categories {
                    ExhaustedCategoryPolicy::Skip => {
                        warn!(?category, "no unvisited place in category, skipping");
                        remaining.remove(&category);
                        route.unsatisfied.push(category);
                    }
                    ExhaustedCategoryPolicy::Terminate => {
                        let error = PlanError::NoCandidateFound { category };
                        return Err(PlanFailure::new(error, route));
                    }
                },
            }
        }

        let Some(winner) = winner else {
            debug!(iteration, "no candidates left, idle iteration");
            route.idle_iterations += 1;
            continue;
        };

        release_slot(&mut remaining, &winner.category);
        visited.insert(winner.place.id().clone());
        position = winner.place.location();

        debug!(
            iteration,
            category = ?winner.category,
            distance = winner.distance,
            "selected stop"
        );
        route.stops.push(winner);
    }

    info!(
        stops = route.stops.len(),
        unsatisfied = route.unsatisfied.len(),
        idle = route.idle_iterations,
        "route planned"
    );

    Ok(route)
}

/// Uncovered categories with the number of stops each still owes.
fn remaining_categories<C>(plan: &[C], policy: DuplicateCategoryPolicy) -> BTreeMap<C, usize>
where
    C: Ord + Clone,
{
    let mut remaining = BTreeMap::new();
    for category in plan {
        let slots = remaining.entry(category.clone()).or_insert(0);
        match policy {
            DuplicateCategoryPolicy::Collapse => *slots = 1,
            DuplicateCategoryPolicy::Repeat => *slots += 1,
        }
    }
    remaining
}

fn release_slot<C: Ord>(remaining: &mut BTreeMap<C, usize>, category: &C) {
    if let Some(slots) = remaining.get_mut(category) {
        *slots -= 1;
        if *slots == 0 {
            remaining.remove(category);
        }
    }
}

/// Query each category and pick its nearest unvisited place.
///
/// Results come back in the order of `categories`, whether or not the
/// lookups ran in parallel. On failure the error of the first failing
/// category in that order is returned.
fn lookup_candidates<R, M>(
    categories: &[CategoryOf<R>],
    position: (f64, f64),
    repository: &R,
    metric: &M,
    visited: &HashSet<<R::Place as PointOfInterest>::Id>,
    parallel: bool,
    cancel: &CancellationToken,
) -> Result<Vec<(CategoryOf<R>, Option<RouteStop<R::Place>>)>, PlanError<CategoryOf<R>>>
where
    R: PlaceRepository + Sync,
    R::Place: Send,
    <R::Place as PointOfInterest>::Id: Sync,
    CategoryOf<R>: Send + Sync,
    M: DistanceMetric + Sync,
{
    let lookup = |category: &CategoryOf<R>| -> Result<_, PlanError<CategoryOf<R>>> {
        if cancel.is_cancelled() {
            return Err(PlanError::Cancelled);
        }
        let places = repository
            .places_by_category(category)
            .map_err(|err| PlanError::Repository(Box::new(err)))?;
        let candidate = nearest_unvisited(category, places, position, metric, visited);
        Ok((category.clone(), candidate))
    };

    if parallel {
        categories
            .par_iter()
            .map(lookup)
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    } else {
        categories.iter().map(lookup).collect()
    }
}

/// First place in distance order that is not yet on the route.
fn nearest_unvisited<P, M>(
    category: &P::CategoryId,
    places: Vec<P>,
    position: (f64, f64),
    metric: &M,
    visited: &HashSet<P::Id>,
) -> Option<RouteStop<P>>
where
    P: PointOfInterest,
    M: DistanceMetric,
{
    let mut best: Option<(P, f64)> = None;

    for place in places {
        if visited.contains(place.id()) {
            continue;
        }
        let location = place.location();
        if !is_finite(location) {
            warn!(?category, ?location, "ignoring place with non-finite coordinates");
            continue;
        }
        let distance = metric.distance(position, location);
        if !distance.is_finite() {
            warn!(?category, ?location, distance, "ignoring place with non-finite distance");
            continue;
        }
        // Strict comparison keeps the earliest place on equal distance.
        if best.as_ref().map_or(true, |(_, nearest)| distance < *nearest) {
            best = Some((place, distance));
        }
    }

    best.map(|(place, distance)| RouteStop {
        place,
        category: category.clone(),
        distance,
    })
}

fn is_finite(location: (f64, f64)) -> bool {
    location.0.is_finite() && location.1.is_finite()
}
