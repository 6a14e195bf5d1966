use esp_idf_svc::hal::delay::FreeRtos;
use log::{error, info, warn};
use sha2::{Digest, Sha256};

use esp32cam_upload::{AppConfig, CameraController};

/// JPEG の SOI マーカー
const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

/// アプリケーションのメインエントリーポイント
fn main() -> anyhow::Result<()> {
    // ESP-IDFの基本初期化
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    info!("esp32cam-upload v{}", esp32cam_upload::VERSION);

    // 設定ファイル読み込み
    let app_config = AppConfig::load().map_err(|e| {
        error!("設定ファイルの読み込みに失敗しました: {}", e);
        anyhow::anyhow!("設定ファイルの読み込みエラー: {}", e)
    })?;

    info!("=== カメラピン配置 (AI-Thinker) ===");
    for (role, assignment) in app_config.camera.pins.assignments() {
        info!("  {:<5} : {}", role, assignment);
    }
    info!(
        "XCLK {} Hz (LEDC timer {}, channel {})",
        app_config.camera.xclk_freq_hz,
        app_config.camera.ledc_timer.index(),
        app_config.camera.ledc_channel.index()
    );

    // カメラ初期化
    let camera = CameraController::new(app_config.camera).map_err(|e| {
        error!("カメラ初期化に失敗しました: {}", e);
        anyhow::anyhow!("カメラ初期化エラー: {}", e)
    })?;

    FreeRtos::delay_ms(100); // カメラの安定化を待つ

    // カメラウォームアップ（設定回数分画像を捨てる）
    let warmup_count = app_config.camera_warmup_frames.unwrap_or(0);
    for i in 0..warmup_count {
        if let Err(e) = camera.capture_image() {
            warn!("ウォームアップキャプチャ失敗: {}", e);
        }
        info!("ウォームアップキャプチャ {} / {}", i + 1, warmup_count);
        FreeRtos::delay_ms(1000);
    }

    if !app_config.capture_test_frame {
        info!("テストキャプチャは無効です");
        return Ok(());
    }

    let frame = camera.capture_image()?;
    let data = frame.data();
    info!(
        "画像キャプチャ完了: {} bytes ({}x{})",
        data.len(),
        frame.width(),
        frame.height()
    );

    if camera.config().pixel_format == esp32cam_upload::hardware::camera::PixelFormat::Jpeg
        && !data.starts_with(&JPEG_SOI)
    {
        warn!("JPEG SOI マーカーがありません");
    }

    let digest = Sha256::digest(data);
    info!("SHA-256: {:x}", digest);

    Ok(())
}
