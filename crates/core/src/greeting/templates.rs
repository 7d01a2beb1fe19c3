//! Curated message templates, three per relationship.

use super::Relationship;

const PARENTS: [&str; 3] = [
    "May this Diwali bring endless joy, prosperity, and happiness to our beloved parents. \
     Your love lights up our lives just like these beautiful diyas. Happy Diwali!",
    "Wishing you both a Diwali filled with sweet moments, bright lights, and the warmth of \
     family love. Thank you for being our guiding light. Happy Diwali!",
    "May Goddess Lakshmi bless you with health, wealth, and all the happiness in the world. \
     Your blessings are our greatest treasure. Happy Diwali!",
];

const FRIENDS: [&str; 3] = [
    "Friendship like ours shines brighter than any Diwali light! Wishing you a festival full \
     of laughter, sweets, and amazing memories. Happy Diwali!",
    "May this Diwali sparkle with joy and shine with happiness for you and your family. \
     Thanks for being such an amazing friend! Happy Diwali!",
    "Let's celebrate this Diwali with the same enthusiasm we bring to our friendship - full \
     of light, laughter, and lots of sweets! Happy Diwali!",
];

const COLLEAGUES: [&str; 3] = [
    "Wishing you and your family a very Happy Diwali! May this festival of lights bring new \
     opportunities, success, and prosperity in your career and life.",
    "May the light of Diwali illuminate your path to success and happiness. Looking forward \
     to another year of great teamwork! Happy Diwali!",
    "Celebrating the festival of lights with wonderful colleagues like you makes it even \
     more special. Wishing you prosperity and joy! Happy Diwali!",
];

const SISTER: [&str; 3] = [
    "To my wonderful sister, may this Diwali bring you all the happiness, success, and sweet \
     moments you deserve. You light up our family! Happy Diwali!",
    "Having a sister like you is like having a permanent Diwali in life - full of light, \
     joy, and sweetness. Wishing you the happiest Diwali!",
    "May Goddess Lakshmi shower you with her choicest blessings, dear sister. Your smile is \
     brighter than any Diwali light! Happy Diwali!",
];

const BROTHER: [&str; 3] = [
    "To my amazing brother, may this Diwali bring you success, happiness, and all your \
     heart's desires. Thanks for always being my protector! Happy Diwali!",
    "Brothers like you make every festival special! Wishing you a Diwali filled with \
     prosperity, joy, and lots of delicious sweets. Happy Diwali!",
    "May the festival of lights illuminate your life with endless happiness and success, \
     dear brother. You're the best! Happy Diwali!",
];

const UNCLE: [&str; 3] = [
    "Wishing my wonderful uncle a very Happy Diwali! May this festival bring you good \
     health, prosperity, and happiness. Your guidance means the world to us.",
    "May the divine light of Diwali spread peace, prosperity, and happiness in your life, \
     dear uncle. Thank you for all your love and support! Happy Diwali!",
    "Celebrating Diwali with family is incomplete without your presence, uncle. Wishing you \
     and aunty a festival full of joy and blessings! Happy Diwali!",
];

const AUNTY: [&str; 3] = [
    "To my lovely aunty, may this Diwali fill your home with happiness, your heart with joy, \
     and your life with prosperity. You're simply wonderful! Happy Diwali!",
    "Wishing my dear aunty a Diwali as sweet as the sweets you make and as bright as your \
     beautiful smile. May all your dreams come true! Happy Diwali!",
    "Your love and care make every festival special, dear aunty. May Goddess Lakshmi bless \
     you with health, wealth, and happiness. Happy Diwali!",
];

/// The template list for a relationship, in display order.
#[must_use]
pub fn templates(relationship: Relationship) -> &'static [&'static str] {
    match relationship {
        Relationship::Parents => &PARENTS,
        Relationship::Friends => &FRIENDS,
        Relationship::Colleagues => &COLLEAGUES,
        Relationship::Sister => &SISTER,
        Relationship::Brother => &BROTHER,
        Relationship::Uncle => &UNCLE,
        Relationship::Aunty => &AUNTY,
    }
}
