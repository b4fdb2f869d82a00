use labyrinth_core::{Coord, Coord2, Direction, Maze};

const WALL: &str = "---";
const GAP: &str = "   ";

/// Draws the maze as text, `@` marks the token, `S` the start and `F` the finish.
pub fn render(maze: &Maze) -> String {
    let grid = maze.grid();
    let (width, height) = maze.size();
    let mut out = String::new();

    for y in 0..height {
        horizontal_edge(&mut out, width, |x| grid[(x, y)].has_wall(Direction::North));
        for x in 0..width {
            let cell = &grid[(x, y)];
            out.push(if cell.has_wall(Direction::West) { '|' } else { ' ' });
            out.push_str(marker(maze, cell.coords()));
        }
        out.push(if grid[(width - 1, y)].has_wall(Direction::East) { '|' } else { ' ' });
        out.push('\n');
    }
    horizontal_edge(&mut out, width, |x| grid[(x, height - 1)].has_wall(Direction::South));

    out
}

fn horizontal_edge(out: &mut String, width: Coord, walled: impl Fn(Coord) -> bool) {
    for x in 0..width {
        out.push('+');
        out.push_str(if walled(x) { WALL } else { GAP });
    }
    out.push_str("+\n");
}

fn marker(maze: &Maze, coords: Coord2) -> &'static str {
    if coords == maze.current_position().coords() {
        " @ "
    } else if coords == maze.start_cell().coords() {
        " S "
    } else if coords == maze.finish_cell().coords() {
        " F "
    } else {
        GAP
    }
}
