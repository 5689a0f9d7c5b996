//! HTML rendering of the display region.

use crate::View;
use crate::text;

use std::fmt;

pub const ERROR_MESSAGE: &str = "Error fetching Pokémon data. Please try again.";

/// Everything the display region can show.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Loading,
    Ready(View),
    Failed,
}

impl Page {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Loading => f.write_str(SPINNER),
            Page::Ready(view) => ready(f, view),
            Page::Failed => write!(
                f,
                r#"<p class="text-center text-danger">{ERROR_MESSAGE}</p>"#
            ),
        }
    }
}

/// Wraps a rendered region in a standalone HTML document.
pub fn document(region: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Random Pokémon</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
</head>
<body>
    <div id="pokemonInfo" class="container text-center">{region}</div>
</body>
</html>
"#
    )
}

const SPINNER: &str = r#"
        <div class="d-flex justify-content-center mt-5">
            <div class="spinner">
                <div class="rect1"></div>
                <div class="rect2"></div>
                <div class="rect3"></div>
                <div class="rect4"></div>
                <div class="rect5"></div>
            </div>
        </div>
    "#;

fn ready(f: &mut fmt::Formatter<'_>, view: &View) -> fmt::Result {
    let subject = view.subject();
    let name = Escaped(&subject.name);

    writeln!(f, "<h2>{}</h2>", Escaped(&text::capitalize(&subject.name)))?;
    writeln!(f, "<p>Pokedex ID: #{}</p>", subject.id)?;

    if let Some(image) = view.image() {
        writeln!(f, r#"<img src="{}" alt="{name}">"#, Escaped(image))?;
    }

    let types: Vec<_> = subject.types.iter().map(|type_| text::shout(type_)).collect();
    writeln!(f, "<p>TYPE: {}</p>", Escaped(&types.join(" / ")))?;

    writeln!(f, r#"<div class="container">"#)?;
    writeln!(f, r#"<div class="row"><div class="col"><div class="card">"#)?;

    writeln!(f, r#"<div class="card-body"><h3>INFO</h3><ul>"#)?;
    writeln!(f, "<li><strong>HEIGHT:</strong> {} m</li>", text::tenths(subject.height))?;
    writeln!(f, "<li><strong>WEIGHT:</strong> {} kg</li>", text::tenths(subject.weight))?;
    writeln!(f, "</ul></div>")?;

    writeln!(f, r#"<div class="card-body"><h3>STATS</h3><ul>"#)?;
    for stat in &subject.stats {
        writeln!(
            f,
            "<li><strong>{}:</strong> {}</li>",
            Escaped(&text::shout(&stat.name)),
            stat.base
        )?;
    }
    writeln!(f, "</ul></div>")?;

    writeln!(f, r#"<div class="card-body"><h3>ABILITIES</h3><ul>"#)?;
    for ability in view.abilities() {
        writeln!(
            f,
            "<li><strong>{}:</strong> {}</li>",
            Escaped(&text::shout(&ability.name)),
            Escaped(&ability.effect)
        )?;
    }
    writeln!(f, "</ul></div>")?;

    writeln!(f, "</div></div></div>")?;

    writeln!(f, r#"<div class="row"><div class="card w-100 mt-3"><div class="card-body">"#)?;
    writeln!(f, "<h3>SPRITES</h3>")?;
    writeln!(
        f,
        r#"<div class="d-flex flex-wrap justify-content-center gap-3">"#
    )?;

    if view.sprites().is_empty() {
        writeln!(f, "<p>No sprites available.</p>")?;
    }

    for sprite in view.sprites() {
        let label = sprite.slot.label();

        writeln!(
            f,
            r#"<div class="text-center"><img src="{url}" alt="{name} {label}" class="sprite-img bg-light rounded p-1"><p class="small mb-0 text-muted">{label}</p></div>"#,
            url = Escaped(&sprite.url),
        )?;
    }

    writeln!(f, "</div></div></div></div>")?;

    writeln!(
        f,
        r#"<div class="row"><div class="card w-100 mt-3"><div class="card-body text-center">"#
    )?;
    writeln!(f, "<h3>LOCATION AREA ENCOUNTERS</h3>")?;

    if view.encounters().is_empty() {
        writeln!(f, r#"<p class="card-text mb-0">Not found in the wild.</p>"#)?;
    } else {
        writeln!(f, "<ul>")?;

        for (version, locations) in view.encounters().iter() {
            let mut locations: Vec<_> = locations.iter().map(String::as_str).collect();
            locations.sort_unstable();

            writeln!(
                f,
                r#"<li class="text-center"><strong>{}:</strong> {}</li>"#,
                Escaped(&text::title(version)),
                Escaped(&locations.join(", "))
            )?;
        }

        writeln!(f, "</ul>")?;
    }

    writeln!(f, "</div></div></div>")?;
    write!(f, "</div>")
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;

        while let Some(i) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..i])?;

            f.write_str(match rest.as_bytes()[i] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            })?;

            rest = &rest[i + 1..];
        }

        f.write_str(rest)
    }
}
