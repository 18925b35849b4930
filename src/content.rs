//! Authored prose for the document variants.
//!
//! Front-matter texts for the merged booklet, the standalone introduction
//! document, and the per-parameter deep-dive chapters.  Everything here is
//! literal content; structure and validation live elsewhere.

/// Front-matter: the problem statement of the merged booklet.
pub const PROBLEM: &str = "Suboptimal school lighting \u{2014} too little or too much \
illuminance, excessive flicker, high glare (UGR), poor spectrum/CCT balance, low CRI, \
and inadequate melanopic stimulus \u{2014} has been linked with headaches, eye strain, \
reduced reading performance, lower attention, and circadian disruption. These factors \
can degrade learning outcomes, increase fatigue, and negatively affect behavior and mood.";

/// Front-matter: the idea statement of the merged booklet.
pub const IDEA: &str = "Systematically study how measurable lighting parameters (CCT, \
CRI, Flicker, Glare/UGR, Uniformity, Melanopic EDI, Vertical Illuminance, Exposure \
Duration, and Horizontal Illuminance) affect children of different ages. Quantify \
biological and cognitive outcomes using literature-anchored dose-response curves and \
compare good versus poor ranges.";

/// Front-matter: what the study chapters present.
pub const STUDY: &str = "For each parameter, we present a definition, biological \
relevance, a literature-anchored response curve with optimal, caution, and risk zones, \
and links to standards or peer-reviewed sources. The combined visuals indicate where \
classroom lighting supports attention, visual comfort, and circadian health \u{2014} \
and where it does not.";

/// Front-matter: lead-in to the recommendation table.
pub const SOLUTION_INTRO: &str = "The following age and environment recommendations \
synthesize standards (EN 12464-1 for lux/UGR/CRI), consensus guidance on melanopic EDI \
(Brown et al., 2022), WELL v2 context on circadian lighting, and flicker guidance \
(IEEE 1789).";

/// Standalone introduction document, in reading order.
pub struct IntroSection {
    /// Section heading; empty for the lead paragraph.
    pub heading: &'static str,
    /// Paragraphs of the section.
    pub paragraphs: &'static [&'static str],
    /// Bulleted list after the paragraphs, possibly empty.
    pub bullets: &'static [&'static str],
}

/// Content of the standalone introduction document.
pub fn intro_sections() -> Vec<IntroSection> {
    vec![
        IntroSection {
            heading: "",
            paragraphs: &[
                "Lighting in schools has long been regarded primarily as a matter of \
                 visual comfort \u{2014} ensuring that students can read, write, and see \
                 the board without strain, while also meeting energy efficiency \
                 requirements. Yet in recent decades, research in neuroscience, \
                 endocrinology, and chronobiology has demonstrated that light is not \
                 only a visual input but also a biological signal. The eye contains \
                 specialized photoreceptors (intrinsically photosensitive retinal \
                 ganglion cells, or ipRGCs) that project to the brain's master \
                 circadian clock in the suprachiasmatic nucleus (SCN). Through this \
                 pathway, light regulates hormone secretion, sleep-wake timing, mood, \
                 and cognitive performance.",
            ],
            bullets: &[],
        },
        IntroSection {
            heading: "The Problem",
            paragraphs: &[
                "Traditional classroom lighting systems are optimized only for \
                 brightness and visibility, ignoring the non-visual biological effects \
                 of light. As a result, students are often exposed to lighting that is \
                 visually adequate but biologically disruptive. Key issues include:",
            ],
            bullets: &[
                "Circadian disruption: high CCT or blue-rich light late in the day \
                 delays melatonin secretion.",
                "Hormonal imbalance: insufficient vertical illuminance in the morning \
                 weakens cortisol amplitude.",
                "Cognitive fatigue: poor uniformity, low CRI, and flicker induce strain \
                 and impaired attention.",
                "Mood instability: inadequate melanopic stimulus reduces serotonin \
                 turnover.",
                "Long-term risks: chronic disruption linked to metabolic, immune, and \
                 psychological disorders.",
            ],
        },
        IntroSection {
            heading: "The Idea",
            paragraphs: &[
                "Light can be described and controlled through measurable parameters \
                 \u{2014} CCT, CRI, flicker, glare, horizontal and vertical illuminance, \
                 melanopic EDI, uniformity, and exposure duration. By aligning these \
                 parameters with their biological, hormonal, skin, nervous system, and \
                 biochemical effects, lighting can be designed not just for seeing but \
                 for learning and wellbeing.",
            ],
            bullets: &[],
        },
        IntroSection {
            heading: "Side Effects of Poor Lighting",
            paragraphs: &[
                "Ignoring biological effects produces consequences beyond discomfort, \
                 including disrupted circadian alignment, abnormal melatonin \
                 suppression, cortisol flattening, headaches, reduced serotonin \
                 synthesis, and lower classroom engagement.",
            ],
            bullets: &[],
        },
        IntroSection {
            heading: "Our Solution",
            paragraphs: &[
                "A parameter-based framework that integrates biology with classroom \
                 lighting design. For each parameter, the chapter documents present \
                 definitions, recommended ranges, biological effects, biochemical \
                 pathways, recommendations, and checklists. By shifting from a purely \
                 visual model to a biological plus visual model, schools can create \
                 environments that enhance attention, stabilize circadian rhythms, \
                 protect long-term health, and ultimately improve educational \
                 outcomes.",
            ],
            bullets: &[],
        },
    ]
}

/// Deep-dive content for one standalone parameter chapter.
pub struct ChapterContent {
    /// Output file stem, e.g. `"01_cct"`.
    pub stem: &'static str,
    /// Chapter title.
    pub title: &'static str,
    /// One-line subtitle under the title.
    pub subtitle: &'static str,
    /// What the parameter measures.
    pub definition: &'static str,
    /// Optimal range statement.
    pub optimal: &'static str,
    /// Caution range statement.
    pub caution: &'static str,
    /// Endocrine effects.
    pub hormones: &'static [&'static str],
    /// Photobiology and peripheral-clock effects.
    pub skin: &'static [&'static str],
    /// Nervous-system effects.
    pub nervous: &'static [&'static str],
    /// Mechanistic biochemical pathways.
    pub biochemistry: &'static [&'static str],
    /// Classroom recommendations.
    pub recommendations: &'static [&'static str],
    /// Commissioning checklist.
    pub checklist: &'static [&'static str],
    /// Chapter references (plain strings).
    pub references: &'static [&'static str],
}

/// The nine standalone chapters.
pub fn chapters() -> Vec<ChapterContent> {
    vec![
        ChapterContent {
            stem: "01_cct",
            title: "CCT \u{2014} Correlated Color Temperature (K)",
            subtitle: "Spectral balance and non-visual biology in schools",
            definition: "Descriptor of spectral appearance versus a blackbody \
                radiator. Higher CCT means blue-rich (shorter wavelengths); lower CCT \
                means warm (longer wavelengths).",
            optimal: "4000\u{2013}5000 K (general instruction), 5000\u{2013}6500 K \
                (morning alertness/exams), 3000\u{2013}3500 K (late-day calming).",
            caution: "\u{2264}2700 K (daytime sleepiness risk) or \u{2265}6500 K \
                (discomfort/glare if uncontrolled).",
            hormones: &[
                "Blue-rich (~460\u{2013}490 nm) light activates ipRGCs (OPN4) and the \
                 SCN, lowering sympathetic tone to the pineal gland and suppressing \
                 daytime melatonin synthesis.",
                "Morning blue-enriched light supports the CRH\u{2192}ACTH\u{2192}cortisol \
                 diurnal peak and stabilizes the HPA rhythm.",
                "Daytime light increases serotonin turnover, supporting mood and \
                 attention; evening warm light permits the melatonin rise.",
            ],
            skin: &[
                "Typical classroom LEDs lack UVB, so vitamin D synthesis is negligible.",
                "Skin opsins (OPN3/OPN5) can entrain local clocks; systemic impact is \
                 modest at indoor illuminances.",
            ],
            nervous: &[
                "ipRGC glutamatergic input to the SCN shifts the CLOCK/BMAL1 \u{2192} \
                 PER/CRY molecular clock phase.",
                "Blue light increases retinal dopamine, aiding contrast sensitivity and \
                 attentional performance.",
            ],
            biochemistry: &[
                "ipRGC\u{2192}SCN: glutamate plus PACAP drive NMDA-dependent calcium \
                 influx, CREB phosphorylation and Per1/Per2 transcription, shifting \
                 phase.",
                "SCN\u{2192}pineal chain: reduced beta-adrenergic signaling lowers \
                 cAMP/PKA and AANAT activity, decreasing melatonin.",
            ],
            recommendations: &[
                "Provide scene presets: Focus (5000\u{2013}6500 K morning), General \
                 (4000\u{2013}5000 K), Calm (3000\u{2013}3500 K late-day).",
                "Coordinate CCT with glare control and vertical EDI targets.",
            ],
            checklist: &[
                "CCT scenes mapped to the timetable.",
                "Glare controlled when using higher CCT.",
                "Teacher control available.",
            ],
            references: &[
                "Park et al. (2015) \u{2014} CCT and illuminance effects on performance.",
                "Brown TM et al. (2022) \u{2014} Reporting light for non-visual effects; \
                 melanopic metrics.",
                "Mott et al. \u{2014} Classroom dynamic lighting and reading fluency.",
            ],
        },
        ChapterContent {
            stem: "02_cri",
            title: "CRI \u{2014} Color Rendering Index (Ra)",
            subtitle: "Color fidelity, strain, and indirect stress biology",
            definition: "Fidelity of color appearance versus a reference source. High \
                CRI improves accurate perception of materials and skin tones.",
            optimal: "Ra \u{2265}80 (classrooms), Ra \u{2265}90 (art/labs).",
            caution: "Ra 70\u{2013}79 (non-critical areas only).",
            hormones: &[
                "Indirect effect: poor fidelity causes visual discomfort and strain, \
                 activating sympathetic and HPA pathways and raising cortisol in \
                 susceptible students.",
            ],
            skin: &[
                "No direct biochemical change; CRI is a fidelity metric, not a dose of \
                 wavelengths.",
            ],
            nervous: &[
                "Spectral gaps that degrade color constancy increase cortical load \
                 (V1/V4), promoting fatigue and reduced attention.",
            ],
            biochemistry: &[
                "Visual strain raises sympathetic output (NE/Epi) and co-activates the \
                 HPA axis (CRH\u{2192}ACTH\u{2192}cortisol).",
                "Retinal glutamate demand rises under difficult perception, increasing \
                 ATP use and oxidative stress risk.",
            ],
            recommendations: &[
                "Specify Ra \u{2265}80 for classrooms; \u{2265}90 for labs and art rooms.",
                "Avoid spectra with deep troughs affecting educational materials and \
                 skin tones.",
            ],
            checklist: &[
                "CRI verified in luminaire data.",
                "Spot-check color charts at desk level.",
            ],
            references: &[
                "EN 12464-1 \u{2014} Indoor workplaces (CRI guidance).",
                "Visual strain literature related to low-fidelity spectra.",
            ],
        },
        ChapterContent {
            stem: "03_flicker",
            title: "Flicker \u{2014} Temporal Light Modulation",
            subtitle: "Invisible flicker, comfort, and neural excitability",
            definition: "Variation of light output over time, described by modulation \
                percentage, frequency, and waveform. Can be imperceptible yet \
                biologically active.",
            optimal: "Percent modulation \u{2264}5% across the occupied dimming range; \
                avoid low fundamental frequencies.",
            caution: "5\u{2013}20% modulation or fundamentals below 100 Hz; evaluate \
                stroboscopic risk.",
            hormones: &[
                "Discomfort and stress from flicker increase ACTH and cortisol; chronic \
                 exposure may destabilize the HPA axis in sensitive individuals.",
            ],
            skin: &["No direct photochemical effect at classroom intensities."],
            nervous: &[
                "Low-frequency components can entrain abnormal cortical rhythms and \
                 trigger migraines or photosensitive seizures in vulnerable \
                 populations.",
                "Raises saccadic suppression demand, causing eye strain, headaches and \
                 reduced reading endurance.",
            ],
            biochemistry: &[
                "Repetitive drive leads to glutamatergic overactivation in the visual \
                 cortex; excitotoxic susceptibility increases.",
                "Arousal circuits: locus coeruleus noradrenaline rises; the HPA axis \
                 activates (CRH\u{2192}ACTH\u{2192}cortisol).",
            ],
            recommendations: &[
                "Specify drivers compliant with IEEE 1789; check flicker at multiple \
                 dim levels.",
                "Test under mains variation; avoid deep PWM at low frequencies.",
            ],
            checklist: &[
                "Percent modulation and/or short-range index documented.",
                "No visible stroboscopic artifacts with moving objects.",
            ],
            references: &[
                "IEEE 1789 \u{2014} Recommended practice for LED modulation (flicker).",
                "Clinical literature on photosensitive epilepsy and migraine triggers.",
            ],
        },
        ChapterContent {
            stem: "04_glare_ugr",
            title: "Glare \u{2014} Unified Glare Rating (UGR)",
            subtitle: "Discomfort, visual fatigue, and stress pathways",
            definition: "Discomfort arising from high luminance contrasts within the \
                field of view, predicted by UGR from source luminance, position, and \
                background.",
            optimal: "UGR \u{2264}19 (classrooms).",
            caution: "UGR 19\u{2013}22 (caution), above 22 (avoid).",
            hormones: &[
                "Persistent discomfort drives sympathetic activation and HPA \
                 upregulation, raising cortisol.",
            ],
            skin: &["No direct skin effect."],
            nervous: &[
                "Retinal overstimulation raises glutamate, causing visual fatigue and \
                 headaches.",
                "Attention fragmentation from bright sources lowers working-memory \
                 efficiency.",
            ],
            biochemistry: &[
                "Aversive visual input engages limbic pathways (amygdala), activating \
                 the HPA axis.",
                "Photoreceptor bleaching/recovery cycles raise mitochondrial ROS, \
                 taxing antioxidant defenses (SOD, catalase).",
            ],
            recommendations: &[
                "Use diffusers or microprismatic optics; avoid direct view of \
                 high-luminance emitters.",
                "Control reflected glare on boards and screens; coordinate luminance \
                 and CCT.",
            ],
            checklist: &[
                "UGR verified in the lighting calculation.",
                "Reflections checked from whiteboards and displays at student eye \
                 positions.",
            ],
            references: &[
                "EN 12464-1 / CIBSE LG \u{2014} Glare limits.",
                "Studies linking glare to visual fatigue and task errors.",
            ],
        },
        ChapterContent {
            stem: "05_uniformity",
            title: "Uniformity \u{2014} Emin / Eavg",
            subtitle: "Spatial consistency, comfort, and load on the visual system",
            definition: "Ratio of minimum to average illuminance. Higher uniformity \
                means fewer dark corners and less adaptation stress.",
            optimal: "\u{2265}0.6 in classrooms (\u{2265}0.7 desirable in exam halls \
                where practicable).",
            caution: "0.4\u{2013}0.59 (caution); below 0.4 (avoid).",
            hormones: &[
                "Uneven fields raise adaptation stress, activating sympathetic and HPA \
                 pathways and increasing cortisol in susceptible students.",
            ],
            skin: &["Neutral at indoor levels."],
            nervous: &[
                "Frequent retinal adaptation (bleach/recover) increases metabolic load \
                 and visual-cortex effort; attention stamina declines.",
            ],
            biochemistry: &[
                "Photoreceptor mitochondrial load rises, generating ROS; antioxidant \
                 defenses (SOD, catalase) are taxed.",
                "Chronic visual stress may upregulate inflammatory mediators (IL-6, \
                 TNF-\u{03b1}) in susceptible individuals.",
            ],
            recommendations: &[
                "Lay out luminaires to minimize contrast; consider indirect components.",
                "Verify uniformity at desks and whiteboards with measurements.",
            ],
            checklist: &[
                "Uniformity ratio from the lighting calculation documented.",
                "Spot measurements confirm design values.",
            ],
            references: &[
                "EN 12464-1 \u{2014} Uniformity requirements for classrooms.",
                "Human factors studies on uneven lighting and visual stress.",
            ],
        },
        ChapterContent {
            stem: "06_melanopic_edi",
            title: "Melanopic EDI \u{2014} Equivalent Daylight Illuminance",
            subtitle: "Spectrally weighted metric for ipRGC stimulus",
            definition: "Photometric metric weighted to melanopsin sensitivity; a \
                better predictor of circadian and other non-visual effects than \
                photopic lux alone.",
            optimal: "\u{2265}250\u{2013}500 melanopic lux for students during the \
                daytime, especially in the morning.",
            caution: "100\u{2013}249 mEDI (weak); below 100 mEDI (insufficient).",
            hormones: &[
                "Daytime \u{2265}250 mEDI yields robust melatonin suppression and \
                 entrainment, supporting the morning cortisol peak.",
                "Daytime light improves serotonin availability, the precursor of \
                 nocturnal melatonin.",
            ],
            skin: &[
                "Skin opsins (e.g. OPN5) may align local circadian rhythms; systemic \
                 hormonal impact is mostly retinally mediated.",
            ],
            nervous: &[
                "Strong melanopic drive synchronizes the SCN, improving noradrenergic \
                 and cholinergic arousal networks.",
            ],
            biochemistry: &[
                "OPN4 signaling (Gq/11 \u{2192} PLC\u{03b2} \u{2192} IP3/DAG) raises \
                 intracellular calcium with transcriptional effects in SCN neurons.",
                "The SCN coordinates peripheral oscillators via neuropeptides (VIP, \
                 AVP), stabilizing metabolism and cognition.",
            ],
            recommendations: &[
                "Use spectrally tuned luminaires and daylight to reach morning mEDI \
                 targets.",
                "Verify with a spectrometer or the CIE S 026 calculator.",
            ],
            checklist: &[
                "mEDI measured at eye height for seated students.",
                "Morning exposure window of at least 2 h at target levels.",
            ],
            references: &[
                "Brown TM et al. (2022) \u{2014} Reporting light for non-visual effects.",
                "CIE S 026/E:2018 \u{2014} Metrology for ipRGC-influenced responses.",
                "WELL \u{2014} Circadian lighting feature guidance.",
            ],
        },
        ChapterContent {
            stem: "07_vertical_illuminance",
            title: "Vertical Illuminance \u{2014} Eye-Level (lx)",
            subtitle: "The better proxy for circadian stimulus",
            definition: "Illuminance on a vertical plane at eye height; more \
                predictive of non-visual responses than horizontal lux.",
            optimal: "300\u{2013}500 lx vertical during the daytime.",
            caution: "200\u{2013}299 lx (weak circadian drive); above 800 lx (check \
                glare/UGR).",
            hormones: &[
                "Adequate vertical light efficiently suppresses melatonin by day and \
                 supports a robust cortisol rhythm.",
            ],
            skin: &[
                "Minimal direct effect absent UV; effects are retinally mediated.",
            ],
            nervous: &[
                "Triggers c-Fos expression in the SCN and resets the molecular clock \
                 (CLOCK/BMAL1 \u{2192} PER/CRY).",
                "Enhances locus coeruleus and basal forebrain activity, improving \
                 alertness and memory encoding.",
            ],
            biochemistry: &[
                "Light pulses drive NMDA-dependent calcium influx, CREB activation and \
                 Per1/Per2 expression, adjusting phase.",
                "SCN outputs modulate pineal AANAT via the sympathetic chain.",
            ],
            recommendations: &[
                "Measure vertical lux at student eye positions across the room.",
                "Combine with spectral tuning to meet melanopic targets.",
            ],
            checklist: &[
                "Vertical lux verified during morning hours.",
                "No direct view of high-luminance sources.",
            ],
            references: &[
                "WELL Building Standard \u{2014} Vertical light at eye guidance.",
                "Brown TM et al. (2022) \u{2014} Circadian-relevant measures.",
            ],
        },
        ChapterContent {
            stem: "08_exposure_duration",
            title: "Exposure Duration \u{2014} Daily Light Dose",
            subtitle: "Time, spectrum and intensity for robust entrainment",
            definition: "Cumulative non-visual light exposure across the day. Both \
                intensity and spectrum matter; morning and forenoon exposure is most \
                impactful.",
            optimal: "2\u{2013}4 h/day of adequate vertical melanopic exposure \
                (\u{2265}250 mEDI) in the morning and early afternoon.",
            caution: "Under 2 h/day or irregular schedules (risk of weak entrainment \
                and delayed sleep).",
            hormones: &[
                "A stable daily dose entrains melatonin onset and cortisol amplitude, \
                 supporting mood and daytime alertness.",
                "Adequate daytime light supports serotonin synthesis and, via \
                 AANAT/ASMT, nighttime melatonin.",
            ],
            skin: &[
                "When outdoor daylight is included, UVB converts \
                 7-dehydrocholesterol to previtamin D3 (activated in liver and \
                 kidney).",
            ],
            nervous: &[
                "SCN stabilization improves hippocampal LTP and memory consolidation, \
                 reducing daytime sleepiness and inattention.",
            ],
            biochemistry: &[
                "CLOCK/BMAL1 drive PER/CRY transcription; PER/CRY proteins inhibit \
                 their own activators. Light, via the SCN, sets the phase.",
                "Vitamin D: skin cholecalciferol \u{2192} 25(OH)D (liver) \u{2192} \
                 1,25(OH)\u{2082}D (kidney) \u{2192} VDR-mediated gene transcription.",
            ],
            recommendations: &[
                "Schedule the brightest, most blue-enriched scenes in the first school \
                 hours; calmer and warmer scenes later.",
                "Encourage outdoor breaks when feasible to supplement the daylight dose.",
            ],
            checklist: &[
                "Morning light block achieved (at least 2 h).",
                "Scene schedules mapped to the timetable; seasonality considered.",
            ],
            references: &[
                "Brown TM et al. (2022) \u{2014} Timing and reporting of non-visual light.",
                "Chronobiology literature: PER/CRY entrainment and cognitive outcomes.",
            ],
        },
        ChapterContent {
            stem: "09_horizontal_illuminance",
            title: "Horizontal Illuminance \u{2014} Desk/Task (lx)",
            subtitle: "Visual performance and non-visual support",
            definition: "Illuminance on the working plane (desks). Adequate levels \
                support reading speed, error reduction, and comfort.",
            optimal: "300\u{2013}500 lx in general classrooms; 750\u{2013}1000 lx \
                short-term for exams and labs, with glare control.",
            caution: "200\u{2013}299 lx (strain risk); above 1000 lx (glare if \
                uncontrolled).",
            hormones: &[
                "Higher daytime illuminance strengthens ipRGC drive, suppressing \
                 melatonin and supporting morning cortisol amplitude.",
                "Adequate light supports serotonin turnover and overall mood and \
                 attention.",
            ],
            skin: &[
                "Indoor electric light carries no UVB, so the vitamin D effect is \
                 negligible.",
            ],
            nervous: &[
                "Greater retinal drive stabilizes the SCN, improving vigilance and \
                 executive function.",
                "Supports prefrontal dopamine tone, reducing errors and enhancing \
                 working memory.",
            ],
            biochemistry: &[
                "ipRGC glutamate/PACAP signaling drives NMDA-calcium-CREB-Per gene \
                 expression; the SCN synchronizes peripheral clocks via AVP/VIP/GABA.",
                "Daylight components, when present, further reinforce circadian \
                 amplitude.",
            ],
            recommendations: &[
                "Design for 300\u{2013}500 lx at desks with uniformity \u{2265}0.6.",
                "Use boost scenes (750\u{2013}1000 lx) for exams; manage glare and \
                 flicker.",
            ],
            checklist: &[
                "Lux measured across multiple desks and rows.",
                "Uniformity and contrast to the board verified.",
            ],
            references: &[
                "EN 12464-1 \u{2014} Classroom illuminance and uniformity.",
                "Park et al. \u{2014} Illuminance and alertness/performance.",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_stems_are_unique_and_ordered() {
        let chapters = chapters();
        assert_eq!(chapters.len(), 9);
        let mut stems: Vec<&str> = chapters.iter().map(|c| c.stem).collect();
        let sorted = {
            let mut copy = stems.clone();
            copy.sort_unstable();
            copy
        };
        assert_eq!(stems, sorted, "stems must sort in chapter order");
        stems.dedup();
        assert_eq!(stems.len(), 9);
    }

    #[test]
    fn every_chapter_is_fully_populated() {
        for chapter in chapters() {
            assert!(!chapter.definition.is_empty(), "{}", chapter.stem);
            assert!(!chapter.optimal.is_empty(), "{}", chapter.stem);
            assert!(!chapter.caution.is_empty(), "{}", chapter.stem);
            assert!(!chapter.hormones.is_empty(), "{}", chapter.stem);
            assert!(!chapter.skin.is_empty(), "{}", chapter.stem);
            assert!(!chapter.nervous.is_empty(), "{}", chapter.stem);
            assert!(!chapter.biochemistry.is_empty(), "{}", chapter.stem);
            assert!(!chapter.recommendations.is_empty(), "{}", chapter.stem);
            assert!(!chapter.checklist.is_empty(), "{}", chapter.stem);
            assert!(!chapter.references.is_empty(), "{}", chapter.stem);
        }
    }

    #[test]
    fn intro_has_lead_and_titled_sections() {
        let sections = intro_sections();
        assert!(sections[0].heading.is_empty());
        assert!(sections.iter().skip(1).all(|s| !s.heading.is_empty()));
        assert!(sections.iter().any(|s| !s.bullets.is_empty()));
    }
}
