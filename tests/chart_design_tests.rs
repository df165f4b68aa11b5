use chart_dataset::ChartError;
use chart_dataset::style::{
    AxisStyle, CHART_DESIGN_JSON_SCHEMA_V1, ChartDesign, ChartKind, ChartTypeStyle, Color,
    ColorIndex, ElementStyle, Font, Insets, LegendStyle, Palette, Position, Stroke, TextAlign,
    TitleStyle,
};

fn sample_design() -> ChartDesign {
    ChartDesign::new()
        .with_title(
            TitleStyle::new()
                .with_position(Position::Top)
                .with_align(TextAlign::Center)
                .with_font(Font::new("Inter", 16.0).bold())
                .with_color(Color::rgb(0.1, 0.1, 0.1)),
        )
        .with_legend(
            LegendStyle::new()
                .with_position(Position::Right)
                .with_display(true)
                .with_padding(Insets::uniform(4.0)),
        )
        .with_x_axis(
            AxisStyle::new()
                .with_position(Position::Bottom)
                .with_label_format("%H:%M")
                .with_label_angle(-45.0),
        )
        .with_y_axis(
            AxisStyle::new()
                .with_caption("ms")
                .with_grid(
                    Stroke::solid(1.0, Color::rgba(0.0, 0.0, 0.0, 0.1)).with_dash(vec![2.0, 2.0]),
                ),
        )
        .with_chart(ChartTypeStyle::new().with_kind(ChartKind::Heatmap {
            cell_gap_px: Some(1.0),
        }))
        .with_background(Color::rgb(1.0, 1.0, 1.0))
        .with_frame(Stroke::solid(1.5, Color::rgb(0.2, 0.2, 0.2)))
        .with_margin(Insets::new(8.0, 12.0, 8.0, 12.0))
        .with_colors(Palette::Blue)
}

#[test]
fn style_fields_are_preserved_between_set_and_get() {
    let design = sample_design();
    design.validate().expect("valid design");

    let title = design.title.as_ref().expect("title");
    assert_eq!(title.position, Some(Position::Top));
    assert_eq!(title.font().map(|f| f.size_px), Some(16.0));
    assert_eq!(title.font().map(|f| f.bold), Some(true));
    assert_eq!(title.color(), Some(Color::rgb(0.1, 0.1, 0.1)));
    assert_eq!(title.is_display(), None);
    assert_eq!(title.margin(), None);

    let legend = design.legend.as_ref().expect("legend");
    assert_eq!(legend.is_display(), Some(true));
    assert_eq!(legend.padding(), Some(Insets::uniform(4.0)));
    assert_eq!(legend.stroke(), None);

    let y_axis = design.y_axis.as_ref().expect("y axis");
    assert_eq!(
        y_axis.grid.as_ref().map(|grid| grid.dash.clone()),
        Some(vec![2.0, 2.0])
    );
    assert_eq!(design.padding, None);
}

fn assert_accessors_mirror_base<S: ElementStyle>(style: &S) {
    let base = style.base();
    assert_eq!(style.is_display(), base.display);
    assert_eq!(style.font(), base.font.as_ref());
    assert_eq!(style.stroke(), base.stroke.as_ref());
    assert_eq!(style.color(), base.color);
    assert_eq!(style.background(), base.background);
    assert_eq!(style.margin(), base.margin);
    assert_eq!(style.padding(), base.padding);
}

fn decorate<S: ElementStyle>(style: S) -> S {
    // Hidden but fully styled: nothing may be dropped or derived from `display`.
    style
        .with_display(false)
        .with_font(Font::new("Mono", 9.0).italic())
        .with_stroke(Stroke::solid(0.5, Color::rgb(0.3, 0.3, 0.3)))
        .with_color(Color::rgba(0.0, 0.5, 1.0, 0.25))
        .with_background(Color::rgb(0.9, 0.9, 0.9))
        .with_margin(Insets::new(1.0, 2.0, 3.0, 4.0))
        .with_padding(Insets::uniform(0.0))
}

#[test]
fn accessors_return_stored_values_unchanged() {
    let title = decorate(TitleStyle::new().with_align(TextAlign::End));
    assert_accessors_mirror_base(&title);
    assert_eq!(title.is_display(), Some(false));
    assert_eq!(title.padding(), Some(Insets::uniform(0.0)));
    assert_eq!(title.color(), Some(Color::rgba(0.0, 0.5, 1.0, 0.25)));

    assert_accessors_mirror_base(&decorate(LegendStyle::new().with_position(Position::Left)));
    assert_accessors_mirror_base(&decorate(AxisStyle::new().with_caption("rps")));
    assert_accessors_mirror_base(&decorate(ChartTypeStyle::new()));
    assert_accessors_mirror_base(&TitleStyle::new());
}

#[test]
fn empty_design_leaves_every_field_absent() {
    let design = ChartDesign::default();
    design.validate().expect("empty design is valid");
    assert_eq!(design.title, None);
    assert_eq!(design.colors, None);

    let style = AxisStyle::new();
    assert_eq!(style.is_display(), None);
    assert_eq!(style.font(), None);
    assert_eq!(style.background(), None);
}

#[test]
fn color_for_prefers_explicit_then_cycles_palette() {
    let explicit = Color::rgb(0.5, 0.5, 0.5);
    let design = ChartDesign::new().with_colors(Palette::Red);
    let red = ColorIndex::builtin(Palette::Red);

    assert_eq!(design.color_for(3, Some(explicit)), Some(explicit));
    assert_eq!(design.color_for(3, None), red.get(3));
    assert_eq!(design.color_for(red.size() + 1, None), red.get(1));

    let default_design = ChartDesign::new();
    assert_eq!(
        default_design.color_for(0, None),
        ColorIndex::builtin(Palette::Colorful1).get(0)
    );

    let no_colors = ChartDesign::new().with_colors(ColorIndex::from_colors(Vec::new()));
    assert_eq!(no_colors.color_for(0, None), None);
}

#[test]
fn validation_rejects_out_of_range_values() {
    let cases = [
        ChartDesign::new().with_background(Color::rgb(1.5, 0.0, 0.0)),
        ChartDesign::new().with_frame(Stroke::solid(0.0, Color::rgb(0.0, 0.0, 0.0))),
        ChartDesign::new().with_margin(Insets::new(-1.0, 0.0, 0.0, 0.0)),
        ChartDesign::new().with_title(TitleStyle::new().with_font(Font::new(" ", 12.0))),
        ChartDesign::new().with_legend(LegendStyle::new().with_item_spacing(f64::NAN)),
        ChartDesign::new().with_x_axis(AxisStyle::new().with_label_angle(120.0)),
        ChartDesign::new().with_y_axis(AxisStyle::new().with_label_format("")),
        ChartDesign::new().with_chart(ChartTypeStyle::new().with_kind(ChartKind::Bar {
            width_ratio: Some(1.5),
            stacked: None,
        })),
        ChartDesign::new().with_colors(ColorIndex::from_colors(vec![Color::rgba(
            0.0, 0.0, 0.0, -0.1,
        )])),
    ];

    for design in cases {
        assert!(
            matches!(design.validate(), Err(ChartError::InvalidData(_))),
            "{design:?}"
        );
    }
}

#[test]
fn json_contract_round_trips_design() {
    let design = sample_design();
    let json = design.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));
    assert!(json.contains("\"colors\": \"blue\""));

    let parsed = ChartDesign::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, design);
}

#[test]
fn bare_design_json_is_accepted() {
    let json = r##"{
        "title": { "display": false, "position": "left" },
        "background": { "red": 0, "green": 0, "blue": 0 },
        "chart": { "kind": { "type": "line", "line_width_px": 2 } },
        "colors": [{ "red": 1, "green": 1, "blue": 0, "alpha": 0.5 }]
    }"##;

    let design = ChartDesign::from_json_compat_str(json).expect("parse bare design");
    let title = design.title.as_ref().expect("title");
    assert_eq!(title.is_display(), Some(false));
    assert_eq!(title.position, Some(Position::Left));
    assert_eq!(design.background, Some(Color::rgb(0.0, 0.0, 0.0)));
    assert_eq!(
        design.chart.as_ref().and_then(|chart| chart.kind),
        Some(ChartKind::Line {
            line_width_px: Some(2.0),
            show_markers: None,
        })
    );
    assert_eq!(
        design.color_for(7, None),
        Some(Color::rgba(1.0, 1.0, 0.0, 0.5))
    );
}

#[test]
fn json_contract_rejects_unknown_version_and_invalid_values() {
    let future = format!(
        "{{\"schema_version\": {}, \"design\": {{}}}}",
        CHART_DESIGN_JSON_SCHEMA_V1 + 1
    );
    assert!(matches!(
        ChartDesign::from_json_compat_str(&future),
        Err(ChartError::InvalidData(message)) if message.contains("schema version")
    ));

    let malformed_contract = r#"{"schema_version": 1, "design": {"frame": 3}}"#;
    assert!(ChartDesign::from_json_compat_str(malformed_contract).is_err());

    let invalid_color = r#"{"background": {"red": 2, "green": 0, "blue": 0}}"#;
    assert!(ChartDesign::from_json_compat_str(invalid_color).is_err());

    assert!(ChartDesign::from_json_compat_str("not json").is_err());
}
