use gemini_live::types::session::{
    GenerationConfig, LiveConfig, ResponseModality, Voice, DEFAULT_MODEL,
};
use gemini_live::SessionEvent;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv_override().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let voice: Voice = std::env::var("GEMINI_VOICE")
        .unwrap_or_else(|_| "Aoede".to_string())
        .parse()?;

    let live_config = LiveConfig::builder(DEFAULT_MODEL)
        .with_system_instruction("You are a helpful assistant.")
        .with_generation_config(GenerationConfig::new(ResponseModality::Text).with_voice(voice))
        .build();

    let session = gemini_live::connect(gemini_live::Config::new(), live_config).await?;
    session.ready().await?;
    println!("setup complete");

    let mut events = session.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                SessionEvent::Content(content) => println!("{:?}", content),
                SessionEvent::Closed { code, reason } => {
                    println!("closed: code={:?} reason={:?}", code, reason);
                    break;
                }
                other => println!("{:?}", other),
            }
        }
    });

    session.send_text_turn("Tell me a joke.").await?;
    tokio::time::sleep(std::time::Duration::from_secs(10)).await;

    session.close().await?;
    session.join().await;
    Ok(())
}
