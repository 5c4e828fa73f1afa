use std::sync::Arc;

use airline_intel::app::App;
use airline_intel::config::ViewerConfig;
use airline_intel::data::airline;
use airline_intel::logging;
use iced::Settings;
use lucide_icons::LUCIDE_FONT_BYTES;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let registry = Arc::new(airline::registry()?);
    let config = ViewerConfig::default();

    iced::application(
        move || App::new(Arc::clone(&registry), config),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .settings(Settings {
        fonts: vec![LUCIDE_FONT_BYTES.into()],
        ..Default::default()
    })
    .window_size((1280.0, 860.0))
    .run()?;

    Ok(())
}
