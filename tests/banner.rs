use logmagix::banner::{
    FALLBACK_WIDTH, GLYPH_HEIGHT, GLYPH_WIDTH, glyph_rows, render_block, resolve_width,
};
use logmagix::{Alignment, Home};

fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count()
}

fn home(text: &str) -> Home {
    Home::new(text).username("tester").colors(false)
}

#[test]
fn glyph_cells_are_fixed_size() {
    for c in ['A', 'm', 'W', '7', '!', ' '] {
        let rows = glyph_rows(c);
        assert_eq!(rows.len(), GLYPH_HEIGHT, "{c:?}");
        assert!(rows.iter().all(|r| r.chars().count() == GLYPH_WIDTH), "{c:?}");
    }
}

#[test]
fn uppercase_fills_from_top() {
    let rows = glyph_rows('H');
    assert!(rows[0].contains('█'));
    assert!(rows[6].contains('█'));
    assert_eq!(rows[7].trim(), "");
}

#[test]
fn lowercase_is_padded_above() {
    let rows = glyph_rows('o');
    assert_eq!(rows[0].trim(), "");
    assert!(rows[6].contains('█'));
    assert_eq!(rows[7].trim(), "");
}

#[test]
fn unknown_characters_render_blank() {
    let rows = glyph_rows('@');
    assert_eq!(rows, vec![" ".repeat(GLYPH_WIDTH); GLYPH_HEIGHT]);
}

#[test]
fn block_concatenates_cells() {
    let block = render_block("Hi");
    assert_eq!(block.len(), GLYPH_HEIGHT);
    assert!(block.iter().all(|row| row.chars().count() == 2 * GLYPH_WIDTH));

    let h = glyph_rows('H');
    let i = glyph_rows('i');
    assert_eq!(block[3], format!("{}{}", h[3], i[3]));
}

#[test]
fn center_alignment_pads_half_the_slack() {
    let lines = home("AB").render_lines(40);
    let block = render_block("AB");
    for (line, row) in lines.iter().zip(&block) {
        assert_eq!(line, &format!("{}{row}", " ".repeat((40 - 16) / 2)));
    }
}

#[test]
fn right_and_left_alignment() {
    let block = render_block("AB");

    let right = home("AB").align(Alignment::Right).render_lines(40);
    assert_eq!(right[0], format!("{}{}", " ".repeat(24), block[0]));

    let left = home("AB").align(Alignment::Left).render_lines(40);
    assert_eq!(left[0], block[0]);
}

#[test]
fn wide_block_is_clamped_to_zero_padding() {
    let lines = home("ABCDEFGHIJ").render_lines(40);
    assert_eq!(lines[0], render_block("ABCDEFGHIJ")[0]);
}

#[test]
fn adinfo_spreads_across_block() {
    let lines = home("AB").adinfo1("left").adinfo2("right").render_lines(40);
    let adinfo = &lines[GLYPH_HEIGHT];

    assert_eq!(adinfo.trim(), format!("left{}right", " ".repeat(7)));
    assert_eq!(leading_spaces(adinfo), 12);
}

#[test]
fn single_adinfo_and_credits() {
    let lines = home("AB").adinfo2("v1.0").credits("by someone").render_lines(40);
    assert_eq!(lines[GLYPH_HEIGHT].trim(), "v1.0");
    assert_eq!(lines[GLYPH_HEIGHT + 1].trim(), "by someone");
}

#[test]
fn closes_with_welcome_and_rule() {
    let lines = home("AB").render_lines(40);
    let welcome = &lines[lines.len() - 2];
    let rule = &lines[lines.len() - 1];

    assert_eq!(welcome.trim(), "~ Welcome tester ~");
    assert_eq!(leading_spaces(welcome), (40 - 18) / 2);
    assert_eq!(rule, &"─".repeat(40));
}

#[test]
fn welcome_is_centered_regardless_of_alignment() {
    let lines = home("AB").align(Alignment::Left).render_lines(40);
    assert_eq!(leading_spaces(&lines[lines.len() - 2]), 11);
}

#[test]
fn write_to_matches_render_lines() {
    let banner = home("Go");
    let mut out = Vec::new();
    banner.write_to(&mut out, 60).unwrap();

    let expected = banner.render_lines(60).join("\n") + "\n";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn colored_output_strips_to_plain() {
    let banner = Home::new("Go").username("tester").colors(true);
    let mut out = Vec::new();
    banner.write_to(&mut out, 60).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains('\x1b'));
    let plain = logmagix::fmt::strip_ansi(&text).into_owned();
    assert_eq!(plain, banner.render_lines(60).join("\n") + "\n");
}

#[test]
fn redirected_stdout_uses_fallback_width() {
    let width = resolve_width(false, || panic!("terminal queried while redirected"));
    assert_eq!(width, FALLBACK_WIDTH);
    assert_eq!(FALLBACK_WIDTH, 80);
}

#[test]
fn terminal_width_comes_from_query() {
    assert_eq!(resolve_width(true, || Ok((132, 40))), 132);
    assert_eq!(resolve_width(true, || Ok((0, 0))), FALLBACK_WIDTH);
    assert_eq!(
        resolve_width(true, || Err(std::io::Error::other("no tty"))),
        FALLBACK_WIDTH
    );
}
