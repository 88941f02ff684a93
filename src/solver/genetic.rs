//! Memetic genetic algorithm (§4.8), grounded in `experimental.py`'s
//! `GeneticAlgorithmTimetabling`. An individual is a `Vec<Assignment>`
//! index-aligned with `instance.sections()` (replacing the source's
//! `section_id -> Assignment` dict, since section order is already fixed
//! and stable after `create_course_sections`).

use crate::constraint::{self, repair_assignments};
use crate::types::{Assignment, Instance, Period, RoomId, SolverConfig, TeacherId};
use rand::seq::SliceRandom;
use rand::Rng;

use super::Solution;

#[derive(Debug, Clone)]
struct Individual {
    assignments: Vec<Assignment>,
    fitness: f64,
    feasible: bool,
    violations: Vec<String>,
}

impl Individual {
    fn new(assignments: Vec<Assignment>) -> Self {
        Self {
            assignments,
            fitness: 0.0,
            feasible: false,
            violations: Vec::new(),
        }
    }
}

pub fn solve<R: Rng>(instance: &Instance, config: &SolverConfig, rng: &mut R) -> Solution {
    if instance.sections().is_empty() {
        return Solution {
            assignments: Vec::new(),
            feasible: true,
            violations: Vec::new(),
            cost: 0.0,
        };
    }

    let pop_size = config.population_size.max(2) as usize;

    let mut population: Vec<Individual> = (0..pop_size)
        .map(|_| {
            let mut ind = Individual::new(generate_random_solution(instance, rng));
            evaluate_individual(instance, &mut ind);
            ind
        })
        .collect();

    for ind in population.iter_mut() {
        if rng.gen::<f64>() < 0.2 {
            local_search(instance, ind, 10, rng);
        }
    }

    let mut best = population
        .iter()
        .min_by(|a, b| a.fitness.partial_cmp(&b.fitness).unwrap())
        .unwrap()
        .clone();
    let mut stagnation = 0u32;

    for _ in 0..config.generations {
        let mut next_population: Vec<Individual> = Vec::with_capacity(pop_size);

        let mut elite = best.clone();
        evaluate_individual(instance, &mut elite);
        next_population.push(elite);

        while next_population.len() < pop_size {
            let parent1 = tournament_selection(&population, config.tournament_size, rng);
            let parent2 = tournament_selection(&population, config.tournament_size, rng);

            let (mut child1, mut child2) = if rng.gen::<f64>() < config.p_c {
                let (a1, a2) = crossover(&parent1.assignments, &parent2.assignments, rng);
                (Individual::new(a1), Individual::new(a2))
            } else {
                (
                    Individual::new(parent1.assignments.clone()),
                    Individual::new(parent2.assignments.clone()),
                )
            };

            mutate(instance, &mut child1, config.p_m, rng);
            mutate(instance, &mut child2, config.p_m, rng);

            evaluate_individual(instance, &mut child1);
            evaluate_individual(instance, &mut child2);

            if rng.gen::<f64>() < 0.2 {
                local_search(instance, &mut child1, 10, rng);
            }
            if rng.gen::<f64>() < 0.2 {
                local_search(instance, &mut child2, 10, rng);
            }

            next_population.push(child1);
            next_population.push(child2);
        }

        next_population.truncate(pop_size);
        next_population.sort_by(|a, b| a.fitness.partial_cmp(&b.fitness).unwrap());
        population = next_population;

        if population[0].fitness < best.fitness {
            best = population[0].clone();
            stagnation = 0;
        } else {
            stagnation += 1;
            if stagnation >= 10 && best.feasible {
                break;
            }
        }

        if stagnation > 10 {
            let start = population.len() / 2;
            for slot in population.iter_mut().skip(start) {
                let mut fresh = Individual::new(generate_random_solution(instance, rng));
                evaluate_individual(instance, &mut fresh);
                *slot = fresh;
            }
            stagnation = 0;
        }
    }

    let mut repaired = best.assignments;
    let repaired_feasible = repair_assignments(instance, &mut repaired, rng);
    let (feasible, violations) = constraint::check(instance, &repaired);
    debug_assert_eq!(feasible, repaired_feasible);
    let mut cost = -constraint::objective(instance, &repaired);
    if !feasible {
        cost += 1000.0 * violations.len() as f64;
    }
    Solution {
        assignments: repaired,
        feasible,
        violations,
        cost,
    }
}

fn generate_random_solution<R: Rng>(instance: &Instance, rng: &mut R) -> Vec<Assignment> {
    let mut assignments: Vec<Assignment> = Vec::with_capacity(instance.sections().len());

    for section in instance.sections() {
        let mut qualified = instance.qualified_teachers_for(&section.course_name);
        qualified.shuffle(rng);
        let mut periods: Vec<Period> = instance.periods().iter().copied().collect();
        periods.shuffle(rng);
        let mut room_ids: Vec<RoomId> = instance.rooms().iter().map(|r| r.id).collect();
        room_ids.shuffle(rng);

        let mut chosen: Option<(Period, RoomId, TeacherId)> = None;
        'search: for &period in &periods {
            for &room_id in &room_ids {
                for &teacher_id in &qualified {
                    if constraint::is_candidate_feasible(instance, section.id, period, room_id, teacher_id, &assignments)
                    {
                        chosen = Some((period, room_id, teacher_id));
                        break 'search;
                    }
                }
            }
        }

        let (period, room_id, teacher_id) = chosen.unwrap_or((
            *periods.choose(rng).expect("instance must have at least one period"),
            *room_ids.choose(rng).expect("instance must have at least one room"),
            *qualified.choose(rng).expect("instance must have at least one teacher"),
        ));
        assignments.push(Assignment::new(section.id, period, room_id, teacher_id));
    }

    assignments
}

fn evaluate_individual(instance: &Instance, individual: &mut Individual) {
    let (feasible, violations) = constraint::check(instance, &individual.assignments);
    let mut cost = -constraint::objective(instance, &individual.assignments);
    if !feasible {
        cost += 1000.0 * violations.len() as f64;
    }
    individual.fitness = cost;
    individual.feasible = feasible;
    individual.violations = violations;
}

fn tournament_selection<'a, R: Rng>(population: &'a [Individual], tournament_size: u32, rng: &mut R) -> &'a Individual {
    let k = (tournament_size as usize).clamp(1, population.len());
    population
        .choose_multiple(rng, k)
        .min_by(|a, b| a.fitness.partial_cmp(&b.fitness).unwrap())
        .expect("tournament sample must be non-empty")
}

fn crossover<R: Rng>(parent1: &[Assignment], parent2: &[Assignment], rng: &mut R) -> (Vec<Assignment>, Vec<Assignment>) {
    let n = parent1.len();
    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }
    let point = rng.gen_range(1..n);

    let mut child1 = parent1[..point].to_vec();
    child1.extend_from_slice(&parent2[point..]);
    let mut child2 = parent2[..point].to_vec();
    child2.extend_from_slice(&parent1[point..]);

    (child1, child2)
}

fn mutate<R: Rng>(instance: &Instance, individual: &mut Individual, p_m: f64, rng: &mut R) {
    if individual.assignments.is_empty() || rng.gen::<f64>() >= p_m {
        return;
    }
    let idx = rng.gen_range(0..individual.assignments.len());
    let section_id = individual.assignments[idx].section_id;
    let Some(section) = instance.section(section_id) else {
        return;
    };

    match rng.gen_range(0..3) {
        0 => {
            if let Some(&period) = instance.periods().iter().copied().collect::<Vec<Period>>().choose(rng) {
                individual.assignments[idx].period = period;
            }
        }
        1 => {
            if let Some(room) = instance.rooms().choose(rng) {
                individual.assignments[idx].room_id = room.id;
            }
        }
        _ => {
            let qualified = instance.qualified_teachers_for(&section.course_name);
            if let Some(&teacher_id) = qualified.choose(rng) {
                individual.assignments[idx].teacher_id = teacher_id;
            }
        }
    }
}

/// Indices (aligned with `instance.sections()`) of assignments that fail
/// `is_candidate_feasible` against the rest — either an individual
/// violation (qualification/availability/capacity) or an overlap with
/// another assignment.
fn conflicting_indices(instance: &Instance, assignments: &[Assignment]) -> Vec<usize> {
    let mut bad = Vec::new();
    for (idx, a) in assignments.iter().enumerate() {
        let others: Vec<Assignment> = assignments
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != idx)
            .map(|(_, o)| *o)
            .collect();
        if !constraint::is_candidate_feasible(instance, a.section_id, a.period, a.room_id, a.teacher_id, &others) {
            bad.push(idx);
        }
    }
    bad
}

/// Embedded hill-climb (§4.8 step 5): prioritizes resolving a conflicting
/// section; failing that, nudges a section away from a non-preferred
/// period; tries up to 5 random 1-moves per step and keeps the first
/// strictly improving one.
fn local_search<R: Rng>(instance: &Instance, individual: &mut Individual, max_steps: u32, rng: &mut R) {
    if individual.assignments.is_empty() {
        return;
    }
    evaluate_individual(instance, individual);

    for _ in 0..max_steps {
        let conflicts = conflicting_indices(instance, &individual.assignments);
        let idx = if !conflicts.is_empty() {
            *conflicts.choose(rng).unwrap()
        } else {
            let non_preferred: Vec<usize> = individual
                .assignments
                .iter()
                .enumerate()
                .filter_map(|(i, a)| {
                    let section = instance.section(a.section_id)?;
                    let preferred: Vec<Period> = instance
                        .preferences()
                        .iter()
                        .filter(|p| p.course_name == section.course_name)
                        .filter_map(|p| p.period)
                        .collect();
                    (!preferred.is_empty() && !preferred.contains(&a.period)).then_some(i)
                })
                .collect();
            if !non_preferred.is_empty() {
                *non_preferred.choose(rng).unwrap()
            } else {
                rng.gen_range(0..individual.assignments.len())
            }
        };

        let original = individual.assignments[idx];
        let section_id = original.section_id;
        let Some(section) = instance.section(section_id) else {
            continue;
        };

        let mut best_fitness = individual.fitness;
        let mut best_candidate = original;
        let mut improved = false;

        for _ in 0..5 {
            let mut candidate = original;
            match rng.gen_range(0..3) {
                0 => {
                    if let Some(&period) = instance.periods().iter().copied().collect::<Vec<Period>>().choose(rng) {
                        candidate.period = period;
                    }
                }
                1 => {
                    if let Some(room) = instance.rooms().choose(rng) {
                        candidate.room_id = room.id;
                    }
                }
                _ => {
                    let qualified = instance.qualified_teachers_for(&section.course_name);
                    if let Some(&teacher_id) = qualified.choose(rng) {
                        candidate.teacher_id = teacher_id;
                    }
                }
            }

            individual.assignments[idx] = candidate;
            let (feasible, violations) = constraint::check(instance, &individual.assignments);
            let mut cost = -constraint::objective(instance, &individual.assignments);
            if !feasible {
                cost += 1000.0 * violations.len() as f64;
            }

            if cost < best_fitness {
                best_fitness = cost;
                best_candidate = candidate;
                improved = true;
                break;
            }
        }

        individual.assignments[idx] = if improved { best_candidate } else { original };
        if improved {
            individual.fitness = best_fitness;
            individual.feasible = best_fitness < 1000.0;
        }
    }

    evaluate_individual(instance, individual);
}
