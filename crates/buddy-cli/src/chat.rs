//! Conversation Loop
//!
//! Reads one line at a time, classifies it and prints a reply followed by
//! the disclaimer. Runs until an exit keyword (or end of input) moves the
//! session to `Terminated`.

use buddy_core::{Intent, IntentClassifier, Result, Session, is_exit_command};
use buddy_market::{AnalysisResult, CoinAnalyzer, ProfitabilityRanking};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::replies;

/// Interactive chat over any line-oriented input and output
pub struct Chat<R, W> {
    input: R,
    output: W,
    classifier: IntentClassifier,
    analyzer: CoinAnalyzer,
    ranking: ProfitabilityRanking,
    session: Session,
}

impl<R, W> Chat<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(
        input: R,
        output: W,
        analyzer: CoinAnalyzer,
        ranking: ProfitabilityRanking,
    ) -> Self {
        Self {
            input,
            output,
            classifier: IntentClassifier::new(),
            analyzer,
            ranking,
            session: Session::new(),
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Greet, then converse until the session terminates
    pub async fn run(&mut self) -> Result<()> {
        tracing::info!(session = %self.session.id, "session started");
        self.write(replies::GREETING).await?;

        while self.session.is_running() {
            self.step().await?;
        }
        Ok(())
    }

    /// One prompt, read, reply cycle
    pub async fn step(&mut self) -> Result<()> {
        self.write(replies::PROMPT).await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            // EOF: finish the prompt line before saying goodbye
            self.write("\n").await?;
            return self.finish().await;
        }

        if is_exit_command(&line) {
            return self.finish().await;
        }

        let query = line.trim_end_matches(['\r', '\n']);
        let reply = self.respond(query).await?;
        self.write(&reply).await
    }

    /// Classify `query` and build the full reply, disclaimer included
    pub async fn respond(&mut self, query: &str) -> Result<String> {
        let intent = self.classifier.classify(query);
        self.session.record_query(query, intent)?;

        let body = self.dispatch(intent).await;
        self.session.record_reply(body.as_str())?;

        Ok(format!("{body}\n{}\n\n", replies::DISCLAIMER))
    }

    async fn dispatch(&self, intent: Intent) -> String {
        if let Some(coin_id) = intent.coin_id() {
            let outcome = self.analyzer.analyze(coin_id).await;
            return settle(coin_id, outcome).map_or_else(
                || replies::COULD_NOT_FETCH.into(),
                |r| replies::coin_card(&r),
            );
        }

        match intent {
            Intent::Sustainability => {
                let outcome = self.analyzer.greenest_pick().await;
                settle("greenest", outcome).map_or_else(
                    || replies::COULD_NOT_FETCH.into(),
                    |r| replies::greenest_pick(&r),
                )
            }
            Intent::Profitability => {
                let outcome = self.analyzer.most_profitable(self.ranking).await;
                settle("most profitable", outcome).map_or_else(
                    || replies::COULD_NOT_FETCH.into(),
                    |r| replies::most_profitable(&r),
                )
            }
            Intent::Trend => replies::TREND_PLACEHOLDER.into(),
            _ => replies::HELP.into(),
        }
    }

    async fn finish(&mut self) -> Result<()> {
        self.write(replies::FAREWELL).await?;
        self.write("\n").await?;
        self.session.terminate();

        let conversation = &self.session.conversation;
        tracing::info!(
            session = %self.session.id,
            queries = conversation.user_turns(),
            intents = ?conversation.intent_counts(),
            duration_secs = self.session.duration().num_seconds(),
            "session ended"
        );
        if tracing::enabled!(tracing::Level::TRACE) {
            tracing::trace!(transcript = %self.session.transcript_json()?, "session transcript");
        }
        Ok(())
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}

/// Collapse a lookup outcome to the result, logging why it is missing
fn settle(
    what: &str,
    outcome: buddy_market::Result<Option<AnalysisResult>>,
) -> Option<AnalysisResult> {
    match outcome {
        Ok(Some(result)) => Some(result),
        Ok(None) => {
            tracing::warn!(lookup = what, "no market data available");
            None
        }
        Err(e) => {
            tracing::warn!(lookup = what, error = %e, "market data lookup failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use buddy_core::SessionState;
    use buddy_market::{CoinRecord, StaticMarketData, SustainabilityTable};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn analyzer(market: StaticMarketData) -> CoinAnalyzer {
        CoinAnalyzer::new(Arc::new(market), Arc::new(SustainabilityTable::builtin()))
    }

    fn chat(input: &[u8], market: StaticMarketData) -> Chat<&[u8], Vec<u8>> {
        Chat::new(input, Vec::new(), analyzer(market), ProfitabilityRanking::Ordinal)
    }

    async fn transcript(input: &str, market: StaticMarketData) -> (String, SessionState) {
        let mut chat = chat(input.as_bytes(), market);
        chat.run().await.unwrap();
        let state = chat.session().state;
        (String::from_utf8(chat.into_output()).unwrap(), state)
    }

    fn reply(body: &str) -> String {
        format!("{body}\n{}\n\n", replies::DISCLAIMER)
    }

    #[tokio::test]
    async fn test_trend_keeps_running() {
        let mut chat = chat(b"", StaticMarketData::sample());
        let out = chat.respond("What's trending?").await.unwrap();

        assert_eq!(out, reply(replies::TREND_PLACEHOLDER));
        assert!(chat.session().is_running());
        assert_eq!(chat.session().message_count(), 2);
    }

    #[tokio::test]
    async fn test_unknown_gets_help() {
        let mut chat = chat(b"", StaticMarketData::sample());
        assert_eq!(chat.respond("xyzzy").await.unwrap(), reply(replies::HELP));
    }

    #[tokio::test]
    async fn test_coin_card() {
        let mut chat = chat(b"", StaticMarketData::sample());
        let out = chat.respond("tell me about cardano").await.unwrap();

        assert!(out.starts_with("\nCryptoBuddy: 🔍 Cardano\n  Price: $0.95\n"));
        assert!(out.contains("  Profitability: Medium\n"));
        assert!(out.contains("  Sustainability: 8.0/10 (low energy use)\n"));
        assert!(out.ends_with(&format!("{}\n\n", replies::DISCLAIMER)));
    }

    #[tokio::test]
    async fn test_missing_coin_data() {
        let mut chat = chat(b"", StaticMarketData::new());
        assert_eq!(
            chat.respond("bitcoin price?").await.unwrap(),
            reply(replies::COULD_NOT_FETCH)
        );
        assert_eq!(
            chat.respond("what's green?").await.unwrap(),
            reply(replies::COULD_NOT_FETCH)
        );
        assert_eq!(
            chat.respond("which one makes money").await.unwrap(),
            reply(replies::COULD_NOT_FETCH)
        );
    }

    #[tokio::test]
    async fn test_green_question_beats_coin_name() {
        let mut chat = chat(b"", StaticMarketData::sample());
        let out = chat.respond("Is Bitcoin a green investment?").await.unwrap();
        assert_eq!(
            out,
            reply(
                "CryptoBuddy: 🌱 The greenest coin is Cardano with sustainability \
                 8.0/10 (low energy use)."
            )
        );
    }

    #[tokio::test]
    async fn test_most_profitable() {
        let market = StaticMarketData::sample().with_record(CoinRecord::new(
            "ethereum",
            "Ethereum",
            dec!(3450),
            dec!(100),
            dec!(50),
        ));
        let mut chat = chat(b"", market);
        assert_eq!(
            chat.respond("what is most profitable?").await.unwrap(),
            reply(
                "CryptoBuddy: 💰 The most profitable pick looks like Ethereum \
                 (Profitability: High)."
            )
        );
    }

    #[tokio::test]
    async fn test_exit_keywords_any_case() {
        for word in ["QUIT", "Bye", "exit"] {
            let (out, state) = transcript(&format!("{word}\n"), StaticMarketData::sample()).await;
            assert_eq!(state, SessionState::Terminated);
            assert_eq!(
                out,
                format!("{}{}{}\n", replies::GREETING, replies::PROMPT, replies::FAREWELL)
            );
        }
    }

    #[tokio::test]
    async fn test_padded_exit_keyword_ends_session() {
        let (out, state) = transcript(" quit \r\nbitcoin\n", StaticMarketData::sample()).await;
        assert_eq!(state, SessionState::Terminated);
        assert_eq!(
            out,
            format!("{}{}{}\n", replies::GREETING, replies::PROMPT, replies::FAREWELL)
        );
    }

    #[tokio::test]
    async fn test_full_session() {
        let input = "What's trending?\r\nxyzzy\nbye\nbitcoin\n";
        let (out, state) = transcript(input, StaticMarketData::sample()).await;

        let expected = [
            replies::GREETING.to_string(),
            replies::PROMPT.to_string(),
            reply(replies::TREND_PLACEHOLDER),
            replies::PROMPT.to_string(),
            reply(replies::HELP),
            replies::PROMPT.to_string(),
            format!("{}\n", replies::FAREWELL),
        ]
        .concat();

        assert_eq!(out, expected);
        assert_eq!(state, SessionState::Terminated);
    }

    #[tokio::test]
    async fn test_eof_ends_session() {
        let (out, state) = transcript("xyzzy\n", StaticMarketData::sample()).await;
        assert!(out.ends_with(&format!("{}\n{}\n", replies::PROMPT, replies::FAREWELL)));
        assert_eq!(state, SessionState::Terminated);
    }

    #[tokio::test]
    async fn test_transcript_records_intents() {
        let mut chat = chat(b"cardano\nprofit\nquit\n", StaticMarketData::sample());
        chat.run().await.unwrap();

        let conversation = &chat.session().conversation;
        assert_eq!(conversation.user_turns(), 2);
        assert_eq!(
            conversation.intent_counts(),
            vec![(Intent::Cardano, 1), (Intent::Profitability, 1)]
        );
    }
}
