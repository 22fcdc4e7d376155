use ratatui::style::Style;

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub chars_per_point: CharDimensions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharDimensions {
    pub horizontal: usize,
    pub vertical: usize,
}

impl CharDimensions {
    pub fn new(horizontal: usize, vertical: usize) -> Self {
        Self { horizontal, vertical }
    }
}

pub struct CharGrid {
    grid: Vec<Vec<char>>,
    styles: Vec<Vec<Style>>,
    logical_width: usize,
    logical_height: usize,
    char_dims: CharDimensions,
}

impl CharGrid {
    /// Grid with every logical point set to `pattern`.
    pub fn filled(
        logical_width: usize,
        logical_height: usize,
        char_dims: CharDimensions,
        pattern: &CharPattern,
    ) -> Self {
        let physical_width = logical_width * char_dims.horizontal;
        let physical_height = logical_height * char_dims.vertical;
        let mut grid = Self {
            grid: vec![vec![' '; physical_width]; physical_height],
            styles: vec![vec![Style::default(); physical_width]; physical_height],
            logical_width,
            logical_height,
            char_dims,
        };
        for y in 0..logical_height {
            for x in 0..logical_width {
                grid.set_logical_point(x, y, pattern);
            }
        }
        grid
    }

    pub fn set_logical_point(&mut self, x: usize, y: usize, pattern: &CharPattern) {
        let start_x = x * self.char_dims.horizontal;
        let start_y = y * self.char_dims.vertical;

        for (dy, row) in pattern.chars.iter().enumerate() {
            for (dx, &ch) in row.iter().enumerate() {
                if let Some(grid_row) = self.grid.get_mut(start_y + dy) {
                    if let Some(cell) = grid_row.get_mut(start_x + dx) {
                        *cell = ch;
                        self.styles[start_y + dy][start_x + dx] = pattern.style;
                    }
                }
            }
        }
    }

    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        self.grid.get(y)?.get(x).copied()
    }

    pub fn style_at(&self, x: usize, y: usize) -> Option<Style> {
        self.styles.get(y)?.get(x).copied()
    }

    pub fn into_lines(self) -> Vec<Vec<char>> {
        self.grid
    }

    /// Rows of characters paired with their styles.
    pub fn into_styled_lines(self) -> Vec<(Vec<char>, Vec<Style>)> {
        self.grid.into_iter().zip(self.styles).collect()
    }

    pub fn physical_width(&self) -> usize {
        self.logical_width * self.char_dims.horizontal
    }

    pub fn physical_height(&self) -> usize {
        self.logical_height * self.char_dims.vertical
    }
}

#[derive(Clone, Debug)]
pub struct CharPattern {
    pub chars: Vec<Vec<char>>,
    pub style: Style,
}

impl CharPattern {
    pub fn new(chars: Vec<Vec<char>>, style: Style) -> Self {
        Self { chars, style }
    }

    pub fn single(ch: char, dims: CharDimensions, style: Style) -> Self {
        let chars = vec![vec![ch; dims.horizontal]; dims.vertical];
        Self { chars, style }
    }
}
