use std::{
    collections::{HashSet, VecDeque},
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use anyhow::Context;
use itertools::Itertools;
use log::{debug, warn};
use nom::{
    character::complete::{char, digit1},
    combinator::{opt, recognize},
    sequence::{pair, tuple},
    IResult, Parser,
};
use nom_supreme::{
    error::ErrorTree,
    final_parser::{final_parser, Location},
    parse_from_str,
    parser_ext::ParserExt,
};
use thiserror::Error;

use crate::library::parse_items_lines;

/// A single unit cube of lava on the lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Cube {
    x: i64,
    y: i64,
    z: i64,
}

impl Cube {
    /// The 6 face-adjacent cubes, in the order +x, -x, +y, -y, +z, -z
    fn neighbors(self) -> impl Iterator<Item = Cube> {
        const OFFSETS: [(i64, i64, i64); 6] = [
            (1, 0, 0),
            (-1, 0, 0),
            (0, 1, 0),
            (0, -1, 0),
            (0, 0, 1),
            (0, 0, -1),
        ];

        OFFSETS.into_iter().map(move |(dx, dy, dz)| Cube {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        })
    }
}

impl Display for Cube {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// Parse a single, possibly negative, coordinate like -12. Coordinates are
/// read as i32 and widened, so stepping 1 past any of them can't overflow.
fn parse_coordinate(input: &str) -> IResult<&str, i64, ErrorTree<&str>> {
    parse_from_str(recognize(pair(opt(char('-')), digit1)))
        .map(|value: i32| i64::from(value))
        .context("coordinate")
        .parse(input)
}

/// Parse a cube like 2,-1,5. No whitespace is allowed around the commas.
fn parse_cube(input: &str) -> IResult<&str, Cube, ErrorTree<&str>> {
    tuple((
        parse_coordinate.terminated(char(',')),
        parse_coordinate.terminated(char(',')),
        parse_coordinate,
    ))
    .map(|(x, y, z)| Cube { x, y, z })
    .context("cube")
    .parse(input)
}

impl FromStr for Cube {
    type Err = ErrorTree<Location>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        final_parser(parse_cube)(s.trim())
    }
}

#[derive(Debug, Clone, Error)]
enum DropletError {
    #[error("there are no lava cubes in the input")]
    Empty,

    #[error("total surface area came out negative ({0}); are there duplicate cubes?")]
    NegativeArea(i64),
}

/// The region the exterior flood fill is confined to. Each axis spans the
/// extrema of the droplet widened by exactly 1, so the minimum corner is
/// always air and the fill can wrap all the way around the droplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoundingBox {
    min: Cube,
    max: Cube,
}

impl BoundingBox {
    /// Returns None if there are no cubes.
    fn enclosing(cubes: &[Cube]) -> Option<Self> {
        let (min_x, max_x) = cubes.iter().map(|cube| cube.x).minmax().into_option()?;
        let (min_y, max_y) = cubes.iter().map(|cube| cube.y).minmax().into_option()?;
        let (min_z, max_z) = cubes.iter().map(|cube| cube.z).minmax().into_option()?;

        Some(BoundingBox {
            min: Cube {
                x: min_x - 1,
                y: min_y - 1,
                z: min_z - 1,
            },
            max: Cube {
                x: max_x + 1,
                y: max_y + 1,
                z: max_z + 1,
            },
        })
    }

    fn contains(&self, cube: &Cube) -> bool {
        (self.min.x..=self.max.x).contains(&cube.x)
            && (self.min.y..=self.max.y).contains(&cube.y)
            && (self.min.z..=self.max.z).contains(&cube.z)
    }
}

/// Count every face that isn't pressed against another lava cube, including
/// the faces around sealed air pockets. Each new cube brings 6 faces and
/// hides 2 for every neighbor already placed.
fn total_surface_area(cubes: &[Cube]) -> Result<usize, DropletError> {
    let (_, total) = cubes.iter().fold(
        (HashSet::with_capacity(cubes.len()), 0i64),
        |(mut lava, total), &cube| {
            if !lava.insert(cube) {
                warn!("duplicate lava cube at {}", cube);
            }

            let touching = cube
                .neighbors()
                .filter(|neighbor| lava.contains(neighbor))
                .count() as i64;

            (lava, total + 6 - 2 * touching)
        },
    );

    usize::try_from(total).map_err(|_| DropletError::NegativeArea(total))
}

/// Result of filling the air around a droplet, starting from the corner of
/// its bounding box.
#[derive(Debug, Clone)]
struct ExteriorFill {
    bounds: BoundingBox,

    /// Air cells the fill expanded from. Never contains lava.
    visited: HashSet<Cube>,

    /// Number of lava faces touched by the fill
    exposed_faces: usize,
}

impl ExteriorFill {
    fn run(cubes: &[Cube]) -> Result<Self, DropletError> {
        let lava: HashSet<Cube> = cubes.iter().copied().collect();
        let bounds = BoundingBox::enclosing(cubes).ok_or(DropletError::Empty)?;

        let mut queue = VecDeque::from([bounds.min]);
        let mut visited = HashSet::new();
        let mut exposed_faces = 0;

        while let Some(cell) = queue.pop_front() {
            if lava.contains(&cell) || !visited.insert(cell) {
                continue;
            }

            for neighbor in cell.neighbors().filter(|neighbor| bounds.contains(neighbor)) {
                if lava.contains(&neighbor) {
                    exposed_faces += 1;
                } else if !visited.contains(&neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(ExteriorFill {
            bounds,
            visited,
            exposed_faces,
        })
    }
}

fn load_cubes(input: &str) -> anyhow::Result<Vec<Cube>> {
    let cubes: Vec<Cube> = parse_items_lines(input).context("failed to parse lava cubes")?;

    if cubes.is_empty() {
        return Err(DropletError::Empty.into());
    }

    debug!("loaded {} lava cubes", cubes.len());
    Ok(cubes)
}

pub fn part1(input: &str) -> anyhow::Result<usize> {
    let cubes = load_cubes(input)?;
    total_surface_area(&cubes).context("failed to compute total surface area")
}

pub fn part2(input: &str) -> anyhow::Result<usize> {
    let cubes = load_cubes(input)?;
    let fill = ExteriorFill::run(&cubes).context("failed to fill droplet exterior")?;

    debug!(
        "visited {} air cells within {} ..= {}",
        fill.visited.len(),
        fill.bounds.min,
        fill.bounds.max
    );

    Ok(fill.exposed_faces)
}
