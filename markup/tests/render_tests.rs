//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! End to end rendering tests

use ansimark_markup::consts::MAX_TAB_WIDTH;
use ansimark_markup::{HtmlRenderer, RenderConfig, escape_html, render, strip_sgr};

#[test]
fn test_deterministic_output() {
    let input = "\x1b[1;32mPASS\x1b[0m test_a\n\x1b[31mFAIL\x1b[0m test_b\t<0.1s>";
    assert_eq!(render(input), render(input));
}

#[test]
fn test_plain_text_passthrough() {
    assert_eq!(render("uptime: 3 days, load 0.42"), "uptime: 3 days, load 0.42");
    assert_eq!(render("a\tb"), "a    b");
}

#[test]
fn test_reset_clears_state() {
    assert_eq!(
        render("\x1b[31mred\x1b[0mplain"),
        "<span style=\"color: #A00\">red</span>plain"
    );
}

#[test]
fn test_escaping_without_wrapper() {
    assert_eq!(render("<b>&1</b>"), "&lt;b&gt;&amp;1&lt;/b&gt;");
}

#[test]
fn test_quotes_escaped() {
    assert_eq!(render("say \"hi\" 'now'"), "say &quot;hi&quot; &#039;now&#039;");
}

#[test]
fn test_newline_variants_match() {
    let expected = "a<br>b";
    assert_eq!(render("a\nb"), expected);
    assert_eq!(render("a\r\nb"), expected);
    assert_eq!(render("a\rb"), expected);
}

#[test]
fn test_empty_input() {
    assert_eq!(render(""), "");
}

#[test]
fn test_combined_codes_in_order() {
    assert_eq!(
        render("\x1b[1;31mbold-red\x1b[0m"),
        "<span style=\"font-weight: bold; color: #A00\">bold-red</span>"
    );
    assert_eq!(
        render("\x1b[31;1mx"),
        "<span style=\"color: #A00; font-weight: bold\">x</span>"
    );
}

#[test]
fn test_double_escaping_is_visible() {
    let once = escape_html("<&>").into_owned();
    let twice = escape_html(&once).into_owned();
    assert_eq!(once, "&lt;&amp;&gt;");
    assert_eq!(twice, "&amp;lt;&amp;amp;&amp;gt;");
    assert_ne!(once, twice);
}

#[test]
fn test_unknown_code_consumed_without_style() {
    assert_eq!(render("\x1b[38mtext"), "text");
    assert_eq!(render("\x1b[38;5;196mtext"), "text");
}

#[test]
fn test_unknown_codes_mixed_with_known() {
    assert_eq!(
        render("\x1b[38;5;4mx"),
        "<span style=\"text-decoration: underline\">x</span>"
    );
}

#[test]
fn test_reset_in_batch_wins() {
    assert_eq!(render("\x1b[1m\x1b[32;0;4mx"), "x");
}

#[test]
fn test_accumulation_keeps_every_color() {
    assert_eq!(
        render("\x1b[31ma\x1b[32mb"),
        "<span style=\"color: #A00\">a</span><span style=\"color: #A00; color: #0A0\">b</span>"
    );
}

#[test]
fn test_per_category_reset_not_modeled() {
    assert_eq!(
        render("\x1b[41mbg\x1b[49mstill"),
        "<span style=\"background-color: #A00\">bg</span><span style=\"background-color: #A00\">still</span>"
    );
}

#[test]
fn test_inverse_and_bright() {
    assert_eq!(
        render("\x1b[7mi\x1b[0m\x1b[96;104mb"),
        "<span style=\"color: #000; background-color: #FFF\">i</span>\
         <span style=\"color: #5FF; background-color: #55F\">b</span>"
    );
}

#[test]
fn test_malformed_sequences_degrade_to_text() {
    assert_eq!(render("\x1b[31"), "\x1b[31");
    assert_eq!(render("\x1b[2Jclear"), "\x1b[2Jclear");
    assert_eq!(render("\x1b]0;<t>\x07"), "\x1b]0;&lt;t&gt;\x07");
}

#[test]
fn test_sequence_split_by_line_ending_is_literal() {
    assert_eq!(render("\x1b[3\r1mx"), "\x1b[3<br>1mx");
}

#[test]
fn test_styles_span_line_breaks() {
    assert_eq!(
        render("\x1b[32mline one\r\nline two\x1b[0m\r\n"),
        "<span style=\"color: #0A0\">line one<br>line two</span><br>"
    );
}

#[test]
fn test_script_injection_is_neutralised() {
    let html = render("\x1b[31m<script>alert('x')</script>\x1b[0m");
    assert!(!html.contains("<script>"));
    assert_eq!(
        html,
        "<span style=\"color: #A00\">&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;</span>"
    );
}

#[test]
fn test_unicode_text() {
    assert_eq!(
        render("\x1b[1m完成\x1b[0m ✓"),
        "<span style=\"font-weight: bold\">完成</span> ✓"
    );
}

#[test]
fn test_renderer_with_config() {
    let renderer = HtmlRenderer::new(
        RenderConfig::default()
            .with_tab_width(8)
            .with_line_break("<br />")
            .with_trim_trailing_newlines(true),
    );
    assert_eq!(renderer.render("\tx\ny\r\n"), "        x<br />y");
}

#[test]
fn test_renderer_clamps_unvalidated_tab_width() {
    let config = RenderConfig::default().with_tab_width(usize::MAX);
    assert!(config.validate().is_err());
    let renderer = HtmlRenderer::new(config);
    assert_eq!(
        renderer.render("a\tb"),
        format!("a{}b", " ".repeat(MAX_TAB_WIDTH))
    );
}

#[test]
fn test_strip_matches_rendered_text() {
    let input = "\x1b[1;31merror\x1b[0m: missing \x1b[4mfile\x1b[0m";
    assert_eq!(strip_sgr(input), "error: missing file");
}
