//! Periodic polling loop.
//!
//! Contains [`encoder_poll_task`], which samples a [`SharedDecoder`] at the
//! rate given by [`PollConfig`] using `embassy-time`.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Ticker};
use embedded_hal::digital::InputPin;

use crate::config::PollConfig;
use crate::direction::Direction;
use crate::shared::SharedDecoder;

/// Sample `decoder` forever at `config.poll_frequency_hz`.
///
/// This is a regular `async fn`, not an Embassy `#[task]`. Wrap it in a
/// concrete task, since Embassy tasks cannot be generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn poll_task(
///     decoder: &'static SharedDecoder<CriticalSectionRawMutex, Input<'static>, Input<'static>>,
///     config: PollConfig,
/// ) {
///     encoder_poll_task(decoder, config).await;
/// }
/// ```
///
/// Other tasks read movement through [`SharedDecoder::position()`] or
/// [`SharedDecoder::take_position()`].
///
/// # Errors
///
/// A failed pin read is logged and the sample skipped; the loop continues.
pub async fn encoder_poll_task<R, A, B>(decoder: &SharedDecoder<R, A, B>, config: PollConfig)
where
    R: RawMutex,
    A: InputPin,
    B: InputPin,
{
    #[cfg(feature = "defmt")]
    defmt::info!("Encoder polling every {} us", config.poll_period_us());

    let mut ticker = Ticker::every(Duration::from_micros(config.poll_period_us()));

    loop {
        ticker.next().await;

        match decoder.poll_step() {
            Ok((step, _position)) => {
                if let Some(_direction) = Direction::from_step(step) {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("Encoder step {}: position={}", _direction, _position);
                }
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::error!("Encoder pin read failed");
            }
        }
    }
}
