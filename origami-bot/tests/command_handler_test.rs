//! Integration tests for [`origami_bot::CommandHandler`] inside the production handler chain.

mod common;

use common::{dispatcher, group, private, MockBot, SentRecord};
use origami_bot::{build_handler_chain, BotError, HandlerError, HandlerResponse};

/// **Test: A conversion command is answered through the Bot in the same chat.**
///
/// **Setup:** Logging → command chain with a recording MockBot.
/// **Action:** `/fahrenheit -40` in a private chat.
/// **Expected:** One message to chat 456; chain returns Reply with the same text.
#[tokio::test]
async fn test_command_reply_sent_through_bot() {
    let bot = MockBot::new();
    let chain = build_handler_chain(dispatcher(), bot.clone());

    let result = chain.handle(&private("/fahrenheit -40")).await.unwrap();

    let expected = "-40.0°F is approximately -40.0°C.".to_string();
    assert_eq!(result, HandlerResponse::Reply(expected.clone()));
    assert_eq!(
        bot.sent(),
        vec![SentRecord {
            chat_id: 456,
            text: expected
        }]
    );
}

/// **Test: Ignored messages send nothing.**
#[tokio::test]
async fn test_ignored_message_sends_nothing() {
    let bot = MockBot::new();
    let chain = build_handler_chain(dispatcher(), bot.clone());

    let result = chain.handle(&group("hello everyone")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert!(bot.sent().is_empty());
}

/// **Test: A failing transport surfaces as HandlerError::ReplyFailed with chat and message ids.**
#[tokio::test]
async fn test_transport_failure_is_reported() {
    let bot = MockBot::failing();
    let chain = build_handler_chain(dispatcher(), bot);

    let err = chain.handle(&private("/start")).await.unwrap_err();

    match err {
        BotError::Handler(HandlerError::ReplyFailed {
            chat_id,
            message_id,
            reason,
        }) => {
            assert_eq!(chat_id, 456);
            assert_eq!(message_id, "msg_1");
            assert!(reason.contains("chat not found"));
        }
        other => panic!("expected ReplyFailed, got {:?}", other),
    }
}

/// **Test: Each message gets its own reply, in order.**
#[tokio::test]
async fn test_sequential_messages_reply_in_order() {
    let bot = MockBot::new();
    let chain = build_handler_chain(dispatcher(), bot.clone());

    chain.handle(&private("/feet")).await.unwrap();
    chain.handle(&private("/feet abc")).await.unwrap();
    chain.handle(&private("how are you")).await.unwrap();

    let texts: Vec<String> = bot.sent().into_iter().map(|r| r.text).collect();
    assert_eq!(
        texts,
        vec![
            "Please provide the number of feet to convert to centimetres.",
            "Invalid input. Please enter a valid number of feet.",
            "I am good! How are you?",
        ]
    );
}
