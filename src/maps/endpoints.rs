use crate::{gametypes::*, maps::Grid};
use rand::{seq::SliceRandom, Rng};

/// Picks a random start and goal among the open interior cells.
pub fn pick_endpoints<G: Grid, R: Rng + ?Sized>(
    grid: &G,
    rng: &mut R,
) -> Result<(Location, Location)> {
    let mut locations = Vec::new();

    for z in 1..grid.depth() as i32 - 1 {
        for x in 1..grid.width() as i32 - 1 {
            let location = Location::new(x, z);

            if !grid.is_blocked(location) {
                locations.push(location);
            }
        }
    }

    if locations.len() < 2 {
        return Err(MazeError::NoEndpoints);
    }

    locations.shuffle(rng);
    Ok((locations[0], locations[1]))
}
