use serde::{Serialize, Deserialize};
use log::debug;

use crate::Float;
use crate::image::features::{descriptor::Descriptor, geometry::point::Point};

/**
 * Correspondence between descriptor ai of image a at p and descriptor bi of image b at q.
 */
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Match {
    pub ai: usize,
    pub bi: usize,
    pub p: Point<Float>,
    pub q: Point<Float>,
    pub distance: Float
}

impl Match {
    pub fn new(ai: usize, bi: usize, p: Point<Float>, q: Point<Float>, distance: Float) -> Match {
        Match { ai, bi, p, q, distance }
    }
}

/**
 * Index and L1 distance of the closest descriptor in bs. Ties keep the lowest index.
 */
pub fn closest_descriptor(a: &Descriptor, bs: &[Descriptor]) -> Option<(usize, Float)> {
    bs.iter().enumerate().fold(None, |best, (index, b)| {
        let distance = a.l1_distance(b);
        match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((index, distance))
        }
    })
}

/**
 * One to one matching. Every descriptor of a proposes its closest descriptor of b, proposals are
 * accepted in ascending distance and a descriptor of b can only be claimed once.
 * The result is sorted by ascending distance.
 */
pub fn match_descriptors(a: &[Descriptor], b: &[Descriptor]) -> Vec<Match> {
    let mut candidates = a.iter().enumerate()
        .filter_map(|(ai, descriptor)| closest_descriptor(descriptor, b)
            .map(|(bi, distance)| Match::new(ai, bi, descriptor.location, b[bi].location, distance)))
        .collect::<Vec<Match>>();

    // stable, so equal distances keep the order of a
    candidates.sort_by(|x, y| x.distance.total_cmp(&y.distance));

    let mut claimed = vec![false; b.len()];
    let matches = candidates.into_iter().filter(|m| {
        let seen = claimed[m.bi];
        claimed[m.bi] = true;
        !seen
    }).collect::<Vec<Match>>();

    debug!("kept {} of {} candidate matches", matches.len(), a.len());
    matches
}
