use anyhow::{anyhow, Result};
use clap::Parser;

use rich_editor::cli::{read_input, CliArgs, CliCommand};
use rich_editor::config::{EditorConfig, EditorOptions};
use rich_editor::host::Page;
use rich_editor::persistence::server_clean_html;
use rich_editor::sanitize::{clean_html, clean_pasted_text};
use rich_editor::styles::{stylesheet, STYLE_ELEMENT_ID};
use rich_editor::Editor;

const RENDER_CONTAINER: &str = "editor";

fn main() -> Result<()> {
    rich_editor::tracing::init();

    let args = CliArgs::parse();
    let input = read_input(args.command.input()).map_err(|e| anyhow!(e))?;

    let output = match args.command {
        CliCommand::CleanText { .. } => clean_pasted_text(&input),
        CliCommand::CleanHtml { server, .. } => {
            if server {
                server_clean_html(input.trim())
            } else {
                clean_html(&input)
            }
        }
        CliCommand::Render {
            config,
            placeholder,
            no_char_count,
            with_styles,
            ..
        } => {
            let base = match config {
                Some(path) => EditorConfig::load_from(&path),
                None => EditorConfig::load(),
            };
            let mut options = EditorOptions::default();
            options.placeholder = placeholder;
            if no_char_count {
                options.show_char_count = Some(false);
            }
            render(base.merged(options), &input, with_styles)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn render(config: EditorConfig, content: &str, with_styles: bool) -> Result<String> {
    let mut page = Page::new().with_container(RENDER_CONTAINER);
    let mut editor = Editor::mount_with_config(&mut page, RENDER_CONTAINER, config)?;
    editor.set_value(content);
    editor.render_into(&mut page);

    let chrome = page.container_html(RENDER_CONTAINER).unwrap_or_default();
    if with_styles {
        Ok(format!(
            "<style id=\"{}\">{}</style>\n{}",
            STYLE_ELEMENT_ID,
            stylesheet(),
            chrome
        ))
    } else {
        Ok(chrome.to_string())
    }
}
