//! Block-letter font for the banner.
//!
//! Uppercase letters, digits and punctuation use 7 drawn rows over an
//! 8-row cell (the last row stays blank); lowercase letters use 6 rows and get
//! one blank row on top so their baseline matches. `#` marks a filled cell.

/// Columns per glyph cell.
pub const GLYPH_WIDTH: usize = 8;
/// Rows per glyph cell.
pub const GLYPH_HEIGHT: usize = 8;

const FILL: char = '█';

#[rustfmt::skip]
fn pattern(c: char) -> Option<&'static [&'static str]> {
    let rows: &'static [&'static str] = match c {
        ' ' => &[],
        'A' => &[" #### ", "##  ##", "##  ##", "######", "##  ##", "##  ##", "##  ##"],
        'B' => &["##### ", "##  ##", "##  ##", "##### ", "##  ##", "##  ##", "##### "],
        'C' => &[" #####", "##    ", "##    ", "##    ", "##    ", "##    ", " #####"],
        'D' => &["##### ", "##  ##", "##  ##", "##  ##", "##  ##", "##  ##", "##### "],
        'E' => &["######", "##    ", "##    ", "##### ", "##    ", "##    ", "######"],
        'F' => &["######", "##    ", "##    ", "##### ", "##    ", "##    ", "##    "],
        'G' => &[" #####", "##    ", "##    ", "## ###", "##  ##", "##  ##", " #####"],
        'H' => &["##  ##", "##  ##", "##  ##", "######", "##  ##", "##  ##", "##  ##"],
        'I' => &["######", "  ##  ", "  ##  ", "  ##  ", "  ##  ", "  ##  ", "######"],
        'J' => &["  ####", "    ##", "    ##", "    ##", "    ##", "##  ##", " #### "],
        'K' => &["##  ##", "## ## ", "####  ", "###   ", "####  ", "## ## ", "##  ##"],
        'L' => &["##    ", "##    ", "##    ", "##    ", "##    ", "##    ", "######"],
        'M' => &["##   ##", "### ###", "#######", "## # ##", "##   ##", "##   ##", "##   ##"],
        'N' => &["##   ##", "###  ##", "#### ##", "## ####", "##  ###", "##   ##", "##   ##"],
        'O' => &[" #### ", "##  ##", "##  ##", "##  ##", "##  ##", "##  ##", " #### "],
        'P' => &["##### ", "##  ##", "##  ##", "##### ", "##    ", "##    ", "##    "],
        'Q' => &[" #### ", "##  ##", "##  ##", "##  ##", "## ###", "##  ##", " ### ##"],
        'R' => &["##### ", "##  ##", "##  ##", "##### ", "## ## ", "##  ##", "##  ##"],
        'S' => &[" #####", "##    ", "##    ", " #### ", "    ##", "    ##", "##### "],
        'T' => &["######", "  ##  ", "  ##  ", "  ##  ", "  ##  ", "  ##  ", "  ##  "],
        'U' => &["##  ##", "##  ##", "##  ##", "##  ##", "##  ##", "##  ##", " #### "],
        'V' => &["##  ##", "##  ##", "##  ##", "##  ##", "##  ##", " #### ", "  ##  "],
        'W' => &["##   ##", "##   ##", "##   ##", "## # ##", "#######", "### ###", "##   ##"],
        'X' => &["##  ##", "##  ##", " #### ", "  ##  ", " #### ", "##  ##", "##  ##"],
        'Y' => &["##  ##", "##  ##", " #### ", "  ##  ", "  ##  ", "  ##  ", "  ##  "],
        'Z' => &["######", "    ##", "   ## ", "  ##  ", " ##   ", "##    ", "######"],

        'a' => &[" #### ", "    ##", " #####", "##  ##", "##  ##", " #####"],
        'b' => &["##    ", "##    ", "##### ", "##  ##", "##  ##", "##### "],
        'c' => &["      ", " #####", "##    ", "##    ", "##    ", " #####"],
        'd' => &["    ##", "    ##", " #####", "##  ##", "##  ##", " #####"],
        'e' => &["      ", " #### ", "##  ##", "######", "##    ", " #####"],
        'f' => &["  ####", " ##   ", "######", " ##   ", " ##   ", " ##   "],
        'g' => &[" #####", "##  ##", "##  ##", " #####", "    ##", " #### "],
        'h' => &["##    ", "##    ", "##### ", "##  ##", "##  ##", "##  ##"],
        'i' => &["  ##  ", "      ", " ###  ", "  ##  ", "  ##  ", " #### "],
        'j' => &["    ##", "      ", "    ##", "    ##", "##  ##", " #### "],
        'k' => &["##    ", "##  ##", "## ## ", "####  ", "## ## ", "##  ##"],
        'l' => &[" ###  ", "  ##  ", "  ##  ", "  ##  ", "  ##  ", " #### "],
        'm' => &["       ", "### ## ", "#######", "## # ##", "##   ##", "##   ##"],
        'n' => &["      ", "##### ", "##  ##", "##  ##", "##  ##", "##  ##"],
        'o' => &["      ", " #### ", "##  ##", "##  ##", "##  ##", " #### "],
        'p' => &["##### ", "##  ##", "##  ##", "##### ", "##    ", "##    "],
        'q' => &[" #####", "##  ##", "##  ##", " #####", "    ##", "    ##"],
        'r' => &["      ", "## ###", "###   ", "##    ", "##    ", "##    "],
        's' => &["      ", " #####", "##    ", " #### ", "    ##", "##### "],
        't' => &[" ##   ", "######", " ##   ", " ##   ", " ##   ", "  ####"],
        'u' => &["      ", "##  ##", "##  ##", "##  ##", "##  ##", " #####"],
        'v' => &["      ", "##  ##", "##  ##", "##  ##", " #### ", "  ##  "],
        'w' => &["       ", "##   ##", "##   ##", "## # ##", "#######", " ## ## "],
        'x' => &["      ", "##  ##", " #### ", "  ##  ", " #### ", "##  ##"],
        'y' => &["##  ##", "##  ##", "##  ##", " #####", "    ##", " #### "],
        'z' => &["      ", "######", "   ## ", "  ##  ", " ##   ", "######"],

        '0' => &[" #### ", "##  ##", "## ###", "######", "### ##", "##  ##", " #### "],
        '1' => &["  ##  ", " ###  ", "  ##  ", "  ##  ", "  ##  ", "  ##  ", "######"],
        '2' => &[" #### ", "##  ##", "    ##", "   ## ", "  ##  ", " ##   ", "######"],
        '3' => &[" #### ", "##  ##", "    ##", "  ### ", "    ##", "##  ##", " #### "],
        '4' => &["   ###", "  ####", " ## ##", "##  ##", "######", "    ##", "    ##"],
        '5' => &["######", "##    ", "##### ", "    ##", "    ##", "##  ##", " #### "],
        '6' => &[" #### ", "##    ", "##    ", "##### ", "##  ##", "##  ##", " #### "],
        '7' => &["######", "    ##", "   ## ", "  ##  ", "  ##  ", "  ##  ", "  ##  "],
        '8' => &[" #### ", "##  ##", "##  ##", " #### ", "##  ##", "##  ##", " #### "],
        '9' => &[" #### ", "##  ##", "##  ##", " #####", "    ##", "    ##", " #### "],

        '!' => &["  ##  ", "  ##  ", "  ##  ", "  ##  ", "  ##  ", "      ", "  ##  "],
        '?' => &[" #### ", "##  ##", "    ##", "   ## ", "  ##  ", "      ", "  ##  "],
        '.' => &["", "", "", "", "", "", "  ##  "],
        ',' => &["", "", "", "", "", "  ##  ", " ##   "],
        ':' => &["", "  ##  ", "  ##  ", "", "  ##  ", "  ##  "],
        '-' => &["", "", "", "######"],
        '_' => &["", "", "", "", "", "", "#######"],
        '/' => &["     ##", "    ## ", "   ##  ", "  ##   ", " ##    ", "##     "],
        '#' => &[" ## ## ", "#######", " ## ## ", " ## ## ", "#######", " ## ## "],
        _ => return None,
    };
    Some(rows)
}

/// The 8 rows of `c`, each exactly [`GLYPH_WIDTH`] characters wide.
/// Characters outside the font come back as a blank cell.
#[must_use]
pub fn glyph_rows(c: char) -> Vec<String> {
    let blank = " ".repeat(GLYPH_WIDTH);
    let Some(pattern) = pattern(c) else {
        return vec![blank; GLYPH_HEIGHT];
    };

    let top = usize::from(c.is_ascii_lowercase());
    let mut rows = vec![blank.clone(); top];
    for row in pattern.iter().take(GLYPH_HEIGHT - top) {
        let drawn: String = row.chars().map(|ch| if ch == '#' { FILL } else { ch }).collect();
        let pad = GLYPH_WIDTH.saturating_sub(drawn.chars().count());
        rows.push(format!("{drawn}{}", " ".repeat(pad)));
    }
    rows.resize(GLYPH_HEIGHT, blank);
    rows
}

/// Renders `text` as a block: [`GLYPH_HEIGHT`] lines of `8 * chars` columns.
#[must_use]
pub fn render_block(text: &str) -> Vec<String> {
    let mut lines = vec![String::new(); GLYPH_HEIGHT];
    for c in text.chars() {
        for (line, row) in lines.iter_mut().zip(glyph_rows(c)) {
            line.push_str(&row);
        }
    }
    lines
}
