//! TtsClient against a mockito stand-in for the Gemini REST endpoint.

mod common;

use common::{audio_envelope, pcm_ramp, MockServerFixture, FLASH_PATH, TEST_KEY};
use mockito::Matcher;
use voicegen::error_code::RemoteErrorClass;
use voicegen::request::RequestBuilder;
use voicegen::response::ResponseDecoder;
use voicegen::{Error, FailureKind, GenerationRequest, SpeakerBinding, TtsModel, Voice};

#[tokio::test]
async fn single_voice_request_body_and_audio() {
    let mut fixture = MockServerFixture::new().await;
    let pcm = pcm_ramp(4800);
    let mock = fixture
        .server
        .mock("POST", FLASH_PATH)
        .match_header("x-goog-api-key", TEST_KEY)
        .match_body(Matcher::PartialJson(serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": "Say cheerfully: Have a wonderful day!"}]}],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": {
                    "voiceConfig": {"prebuiltVoiceConfig": {"voiceName": "Puck"}}
                }
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(audio_envelope(&pcm, "audio/L16;codec=pcm;rate=24000").to_string())
        .create_async()
        .await;

    let client = fixture.client();
    let payload = RequestBuilder::new()
        .build(&GenerationRequest::single(
            "Say cheerfully: Have a wonderful day!",
            Voice::Puck,
        ))
        .unwrap();
    let response = client.synthesize(&payload).await.unwrap();
    let audio = ResponseDecoder::new().extract(&response).unwrap();

    mock.assert_async().await;
    assert_eq!(audio.pcm().as_ref(), pcm.as_slice());
    assert_eq!(audio.sample_rate(), 24_000);
}

#[tokio::test]
async fn multi_speaker_request_targets_pro_model() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock(
            "POST",
            "/v1beta/models/gemini-2.5-pro-preview-tts:generateContent",
        )
        .match_body(Matcher::PartialJson(serde_json::json!({
            "generationConfig": {
                "speechConfig": {
                    "multiSpeakerVoiceConfig": {
                        "speakerVoiceConfigs": [
                            {"speaker": "Joe", "voiceConfig": {"prebuiltVoiceConfig": {"voiceName": "Kore"}}},
                            {"speaker": "Jane", "voiceConfig": {"prebuiltVoiceConfig": {"voiceName": "Puck"}}}
                        ]
                    }
                }
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(audio_envelope(&pcm_ramp(96), "audio/L16;codec=pcm;rate=24000").to_string())
        .create_async()
        .await;

    let request = GenerationRequest::multi(
        "Joe: How's it going?\nJane: Not too bad, how about you?",
        vec![
            SpeakerBinding::new("Joe", Voice::Kore),
            SpeakerBinding::new("Jane", Voice::Puck),
        ],
    )
    .with_model(TtsModel::Pro);
    let payload = RequestBuilder::new().build(&request).unwrap();

    fixture.client().synthesize(&payload).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn invalid_key_is_authentication_remote_error() {
    let mut fixture = MockServerFixture::new().await;
    let body = serde_json::json!({
        "error": {
            "code": 400,
            "message": "API key not valid. Please pass a valid API key.",
            "status": "INVALID_ARGUMENT",
            "details": [{
                "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                "reason": "API_KEY_INVALID"
            }]
        }
    });
    fixture.mock_json(FLASH_PATH, 400, &body.to_string()).await;

    let payload = RequestBuilder::new()
        .build(&GenerationRequest::single("Hello", Voice::Kore))
        .unwrap();
    let err = fixture.client().synthesize(&payload).await.unwrap_err();

    match &err {
        Error::Remote {
            status,
            class,
            message,
        } => {
            assert_eq!(*status, 400);
            assert_eq!(*class, RemoteErrorClass::Authentication);
            assert!(message.contains("API key not valid"));
        }
        other => panic!("expected remote error, got {other:?}"),
    }
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[tokio::test]
async fn quota_exhausted_is_classified() {
    let mut fixture = MockServerFixture::new().await;
    let body = serde_json::json!({
        "error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}
    });
    fixture.mock_json(FLASH_PATH, 429, &body.to_string()).await;

    let payload = RequestBuilder::new()
        .build(&GenerationRequest::single("Hello", Voice::Kore))
        .unwrap();
    let err = fixture.client().synthesize(&payload).await.unwrap_err();
    assert!(matches!(err, Error::Remote { status: 429, .. }));
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[tokio::test]
async fn plain_text_error_body_is_kept() {
    let mut fixture = MockServerFixture::new().await;
    fixture
        .server
        .mock("POST", FLASH_PATH)
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let payload = RequestBuilder::new()
        .build(&GenerationRequest::single("Hello", Voice::Kore))
        .unwrap();
    let err = fixture.client().synthesize(&payload).await.unwrap_err();
    match err {
        Error::Remote {
            status, message, class,
        } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
            assert_eq!(class, RemoteErrorClass::ServerError);
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn blocked_prompt_decodes_to_empty_response() {
    let mut fixture = MockServerFixture::new().await;
    let body = serde_json::json!({"promptFeedback": {"blockReason": "SAFETY"}});
    fixture.mock_json(FLASH_PATH, 200, &body.to_string()).await;

    let payload = RequestBuilder::new()
        .build(&GenerationRequest::single("Hello", Voice::Kore))
        .unwrap();
    let response = fixture.client().synthesize(&payload).await.unwrap();
    let err = ResponseDecoder::new().extract(&response).unwrap_err();

    assert_eq!(err.kind(), FailureKind::EmptyResponse);
    assert!(err.to_string().contains("SAFETY"));
}

#[tokio::test]
async fn malformed_success_body_is_empty_response() {
    let mut fixture = MockServerFixture::new().await;
    fixture.mock_json(FLASH_PATH, 200, "not json").await;

    let payload = RequestBuilder::new()
        .build(&GenerationRequest::single("Hello", Voice::Kore))
        .unwrap();
    let err = fixture.client().synthesize(&payload).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::EmptyResponse);
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let client = voicegen::TtsClient::builder()
        .api_key(TEST_KEY)
        .base_url("http://127.0.0.1:9")
        .timeout_secs(2)
        .build()
        .unwrap();
    let payload = RequestBuilder::new()
        .build(&GenerationRequest::single("Hello", Voice::Kore))
        .unwrap();

    let err = client.synthesize(&payload).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.kind(), FailureKind::Transport);
}
