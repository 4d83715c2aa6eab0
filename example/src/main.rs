use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use parking_lot::Mutex;
use ranger_components::range_slider::{RangeSlider, RangeSliderArgs, RangeSliderChange, Thumb};
use ranger_ui::{CursorEvent, FocusOrigin, LayoutBox, Px, PxPosition, logging};
use tracing::info;

#[derive(Parser)]
#[command(name = "example")]
#[command(version, about = "Drive a headless range slider from the command line", long_about = None)]
struct Cli {
    #[command(flatten)]
    slider: SliderArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct SliderArgs {
    /// Lowest selectable value
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    min: f64,
    /// Highest selectable value
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    max: f64,
    /// Snap granularity
    #[arg(long, default_value_t = 1.0)]
    step: f64,
    /// Initial min value (defaults to --min)
    #[arg(long, allow_negative_numbers = true)]
    min_value: Option<f64>,
    /// Initial max value (defaults to --max)
    #[arg(long, allow_negative_numbers = true)]
    max_value: Option<f64>,
    /// Left edge of the track, in pixels
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    track_left: i32,
    /// Track width, in pixels
    #[arg(long, default_value_t = 200)]
    track_width: i32,
}

#[derive(Subcommand)]
enum Command {
    /// Press, move along a path and release
    Drag {
        /// Thumb to grab before pressing
        #[arg(short, long, value_enum, default_value_t = ThumbChoice::Nearest)]
        thumb: ThumbChoice,
        /// Pointer x coordinates; the first is the press, the rest are moves
        #[arg(required = true, value_delimiter = ',', allow_negative_numbers = true)]
        path: Vec<i32>,
    },
    /// Click the track once
    Click {
        /// Pointer x coordinate
        #[arg(allow_negative_numbers = true)]
        x: i32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThumbChoice {
    Min,
    Max,
    Nearest,
}

impl ThumbChoice {
    fn thumb(self) -> Option<Thumb> {
        match self {
            Self::Min => Some(Thumb::Min),
            Self::Max => Some(Thumb::Max),
            Self::Nearest => None,
        }
    }
}

impl SliderArgs {
    fn to_args(&self) -> RangeSliderArgs {
        let mut args = RangeSliderArgs::default()
            .min(self.min)
            .max(self.max)
            .step(self.step)
            .thumb_label(true);
        if let Some(value) = self.min_value {
            args = args.min_value(value);
        }
        if let Some(value) = self.max_value {
            args = args.max_value(value);
        }
        args
    }
}

fn at(x: i32) -> PxPosition {
    PxPosition::new(Px(x), Px::ZERO)
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let mut slider =
        RangeSlider::try_new(cli.slider.to_args()).context("invalid slider configuration")?;
    if cli.slider.track_width <= 0 {
        bail!("track width must be positive, got {}", cli.slider.track_width);
    }
    slider.attach_track(LayoutBox::new(
        Px(cli.slider.track_left),
        Px(cli.slider.track_width),
    ));

    let committed: Arc<Mutex<Vec<RangeSliderChange>>> = Arc::default();
    slider.subscribe_input(|change: RangeSliderChange| {
        info!(min = change.min_value, max = change.max_value, "input");
    });
    let sink = Arc::clone(&committed);
    slider.subscribe_change(move |change: RangeSliderChange| {
        info!(min = change.min_value, max = change.max_value, "change");
        sink.lock().push(change);
    });

    info!(range = ?slider.value(), "initial");
    slider.on_focus(FocusOrigin::Mouse);

    match cli.command {
        Command::Drag { thumb, path } => {
            let Some((first, rest)) = path.split_first() else {
                bail!("drag path is empty");
            };
            if let Some(thumb) = thumb.thumb() {
                slider.on_thumb_pointer_down(thumb);
            }
            slider.handle_cursor_event(&CursorEvent::pressed(at(*first)));
            let mut last = *first;
            for x in rest {
                slider.handle_cursor_event(&CursorEvent::moved(at(*x)));
                last = *x;
            }
            slider.handle_cursor_event(&CursorEvent::released(at(last)));
        }
        Command::Click { x } => slider.on_track_click(at(x)),
    }
    slider.on_blur();

    println!(
        "range: {} .. {}",
        slider.min_display_value(),
        slider.max_display_value()
    );
    println!("fill: {}", slider.track_fill_transform());
    println!("committed changes: {}", committed.lock().len());
    Ok(())
}
