//! The fixed HTML page the puzzle is rendered into.

/// Placeholder tokens: `{{ title }}`, `{{ cluesAcross }}`, `{{ cluesDown }}`
/// and `{{ grid }}`. Substitution is literal global replacement; this is not
/// a templating language.
const TEMPLATE: &str = r#"
<html>
  <head>
    <meta charset="UTF-8">
    <title>{{ title }}</title>
    <style>
      /*!
       *  Hack typeface https://github.com/source-foundry/Hack
       *  License: https://github.com/source-foundry/Hack/blob/master/LICENSE.md
       */
      @font-face {
        font-family: 'Hack';
        src: url('https://cdn.jsdelivr.net/npm/hack-font@3.3.0/build/web/fonts/hack-regular.woff2?sha=3114f1256') format('woff2'), url('fonts/hack-regular.woff?sha=3114f1256') format('woff');
        font-weight: 400;
        font-style: normal;
      }

      @font-face {
        font-family: 'Hack';
        src: url('https://cdn.jsdelivr.net/npm/hack-font@3.3.0/build/web/fonts/hack-bold.woff2?sha=3114f1256') format('woff2'), url('fonts/hack-bold.woff?sha=3114f1256') format('woff');
        font-weight: 700;
        font-style: normal;
      }

      @font-face {
        font-family: 'Hack';
        src: url('https://cdn.jsdelivr.net/npm/hack-font@3.3.0/build/web/fonts/hack-italic.woff2?sha=3114f1256') format('woff2'), url('fonts/hack-italic.woff?sha=3114f1256') format('woff');
        font-weight: 400;
        font-style: italic;
      }

      @font-face {
        font-family: 'Hack';
        src: url('https://cdn.jsdelivr.net/npm/hack-font@3.3.0/build/web/fonts/hack-bolditalic.woff2?sha=3114f1256') format('woff2'), url('fonts/hack-bolditalic.woff?sha=3114f1256') format('woff');
        font-weight: 700;
        font-style: italic;
      }

      html {
        font-family: Hack, monospace, sans-serif;
        margin: 0;
        padding: 2cm;
      }

      h1, p {
        font-size: 7pt;
        font-weight: 400;
        line-height: 1.7;
      }

      h1 {
        margin: 0 0 4pt;
      }

      p {
        margin: 0;
      }

      h2 {
        font-size: 8pt;
        font-weight: 700;
        line-height: 1.625;
        margin: 10pt 0 1pt;
        text-transform: uppercase;
      }

      section {
        display: flex;
      }

      .clues {
        margin-right: 0.65cm;
        width: 12.5cm;
      }

      .grid {
        border-top: 2px solid #000;
        width: 12.05cm;
      }
      .grid__row {
        border-left: 2px solid;
        display: flex;
      }
      .grid__cell {
        aspect-ratio: 1 / 1;
        border-bottom: 2px solid;
        border-right: 2px solid;
        flex: 1;
        font-family: Arial, sans-serif;
        font-size: 6pt;
        padding: 1pt;
      }
      .grid__cell--fill {
        background-color: #000;
      }
    </style>
  </head>
  <body>
    <section>
      <div class="clues">
        <h1>{{ title }}</h1>
        <h2>Across</h2>
        <div>{{ cluesAcross }}</div>
        <h2>Down</h2>
        <div>{{ cluesDown }}</div>
      </div>

      {{ grid }}
    </section>
  </body>
</html>
"#;

/// Substitute the four placeholder tokens into the template.
///
/// Inserted text is not HTML-escaped. That matches the source material,
/// where clue text may legitimately contain markup, but it does mean a
/// hostile puzzle file could inject arbitrary HTML into the rendered page.
pub fn fill(title: &str, clues_across: &str, clues_down: &str, grid: &str) -> String {
    TEMPLATE
        .replace("{{ cluesAcross }}", clues_across)
        .replace("{{ cluesDown }}", clues_down)
        .replace("{{ title }}", title)
        .replace("{{ grid }}", grid)
}
