//! Prompt template for the job search

use crate::job::query::JobQuery;

/// Template for the single search prompt sent to the model
pub struct JobPromptTemplate;

impl JobPromptTemplate {
    /// Region every search is restricted to
    pub const REGION: &'static str = "텍사스 오스틴(Austin, TX)";

    /// Job families the search covers
    pub const JOB_FAMILIES: &'static str = "수학 튜터, 교사, 스쿨버스 기사";

    /// Detail fields every posting summary must include: wage, qualifications,
    /// entry-level eligibility, start timing, remote, part-time, contract terms
    pub const REQUIRED_FIELDS: &'static str =
        "임금(시급/연봉), 자격조건, 신입채용여부, 시작시점, 재택여부, 파트타임여부, 계약조건";

    /// Sentinels the model uses for fields it cannot find
    pub const MISSING_FIELD_SENTINELS: &'static str = "'N/A' 또는 '공고 확인 필요'";

    /// Build the prompt for a query.
    ///
    /// The output asks for ONLY a markdown table summarizing 3-5 postings.
    pub fn job_search(query: &JobQuery) -> String {
        format!(
            r#"{region} 지역에서 현재 채용 중인 **{query}** 직종에 대한 최신 구인 정보를 검색하고,
다음 세부 항목들을 포함하는 마크다운 테이블 형식으로 결과를 정리해 주세요.
검색 대상 직군: {families}
검색 결과가 여러 개일 경우, 주요 채용 공고 3~5개를 요약합니다.

필수 세부 항목: {fields}

결과는 오직 마크다운 테이블로만 제공하며, 어떠한 설명이나 추가 텍스트도 포함하지 마세요.
정보가 없는 경우 {sentinels}로 표시하세요."#,
            region = Self::REGION,
            query = query,
            families = Self::JOB_FAMILIES,
            fields = Self::REQUIRED_FIELDS,
            sentinels = Self::MISSING_FIELD_SENTINELS,
        )
    }
}
