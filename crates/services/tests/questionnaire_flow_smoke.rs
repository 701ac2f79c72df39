use quiz_core::model::{AnswerRole, Phase, QuestionText, ShareToken};
use quiz_core::time::fixed_now;
use services::{Clock, InputOutcome, SessionFlowService, TokenGenerator};

#[test]
fn full_flow_produces_comparison_dataset() {
    let token = ShareToken::new("k9f3a1").unwrap();
    let flow = SessionFlowService::new(Clock::fixed(fixed_now()), TokenGenerator::fixed(token));

    let mut session = flow.start_session();
    assert_eq!(
        flow.add_question_raw(&mut session, "   ").unwrap(),
        InputOutcome::Ignored
    );
    flow.add_question_raw(&mut session, "Do you like jazz?")
        .unwrap();
    flow.add_question_raw(&mut session, "Do you enjoy hiking?")
        .unwrap();
    assert_eq!(session.question_count(), 2);

    let link = flow.publish(&mut session).unwrap();
    assert_eq!(link.as_str(), "https://yourapp.com/questionnaire/k9f3a1");
    assert_eq!(session.phase(), Phase::CreatorAnswering);

    let jazz = QuestionText::new("Do you like jazz?").unwrap();
    let hiking = QuestionText::new("Do you enjoy hiking?").unwrap();

    flow.record_answer_raw(&mut session, AnswerRole::Creator, &jazz, "4")
        .unwrap();
    flow.record_answer_raw(&mut session, AnswerRole::Creator, &hiking, "5")
        .unwrap();
    flow.submit_creator_answers(&mut session).unwrap();

    assert_eq!(
        flow.record_answer_raw(&mut session, AnswerRole::Respondent, &jazz, "2")
            .unwrap(),
        InputOutcome::Accepted
    );
    assert_eq!(
        flow.record_answer_raw(&mut session, AnswerRole::Respondent, &hiking, "nope")
            .unwrap(),
        InputOutcome::Ignored
    );
    flow.submit_respondent_answers(&mut session).unwrap();
    assert!(session.is_complete());
    assert_eq!(session.completed_at(), Some(fixed_now()));

    let dataset = flow.chart_dataset(&session).unwrap();
    let points = dataset.points();
    assert_eq!(points.len(), 2);

    assert_eq!(points[0].label, "Do you like jazz?...");
    assert_eq!(points[0].creator_score, 4);
    assert_eq!(points[0].respondent_score, 2);

    assert_eq!(points[1].label, "Do you enjoy hiki...");
    assert_eq!(points[1].creator_score, 5);
    assert_eq!(points[1].respondent_score, 0);
}
