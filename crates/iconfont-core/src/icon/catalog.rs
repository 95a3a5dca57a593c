//! The Font Awesome 4.2.0 glyph table.
//!
//! One row per identifier: `identifier = 'code point'`, with aliases naming
//! the canonical identifier they share a glyph with (`=> canonical`).
//! Glyphs added after 4.0.3 are not carried; the aliases are the ones the
//! 4.2.0 stylesheet defines for those glyphs.

use super::IconDescriptor;

icon_catalog! {
    glass = '\u{f000}',
    music = '\u{f001}',
    search = '\u{f002}',
    envelope_o = '\u{f003}',
    heart = '\u{f004}',
    star = '\u{f005}',
    star_o = '\u{f006}',
    user = '\u{f007}',
    film = '\u{f008}',
    th_large = '\u{f009}',
    th = '\u{f00a}',
    th_list = '\u{f00b}',
    check = '\u{f00c}',
    times = '\u{f00d}',
    remove = '\u{f00d}' => times,
    close = '\u{f00d}' => times,
    search_plus = '\u{f00e}',
    search_minus = '\u{f010}',
    power_off = '\u{f011}',
    signal = '\u{f012}',
    cog = '\u{f013}',
    gear = '\u{f013}' => cog,
    trash_o = '\u{f014}',
    home = '\u{f015}',
    file_o = '\u{f016}',
    clock_o = '\u{f017}',
    road = '\u{f018}',
    download = '\u{f019}',
    arrow_circle_o_down = '\u{f01a}',
    arrow_circle_o_up = '\u{f01b}',
    inbox = '\u{f01c}',
    play_circle_o = '\u{f01d}',
    repeat = '\u{f01e}',
    rotate_right = '\u{f01e}' => repeat,
    refresh = '\u{f021}',
    list_alt = '\u{f022}',
    lock = '\u{f023}',
    flag = '\u{f024}',
    headphones = '\u{f025}',
    volume_off = '\u{f026}',
    volume_down = '\u{f027}',
    volume_up = '\u{f028}',
    qrcode = '\u{f029}',
    barcode = '\u{f02a}',
    tag = '\u{f02b}',
    tags = '\u{f02c}',
    book = '\u{f02d}',
    bookmark = '\u{f02e}',
    print = '\u{f02f}',
    camera = '\u{f030}',
    font = '\u{f031}',
    bold = '\u{f032}',
    italic = '\u{f033}',
    text_height = '\u{f034}',
    text_width = '\u{f035}',
    align_left = '\u{f036}',
    align_center = '\u{f037}',
    align_right = '\u{f038}',
    align_justify = '\u{f039}',
    list = '\u{f03a}',
    outdent = '\u{f03b}',
    dedent = '\u{f03b}' => outdent,
    indent = '\u{f03c}',
    video_camera = '\u{f03d}',
    picture_o = '\u{f03e}',
    pencil = '\u{f040}',
    map_marker = '\u{f041}',
    adjust = '\u{f042}',
    tint = '\u{f043}',
    pencil_square_o = '\u{f044}',
    share_square_o = '\u{f045}',
    check_square_o = '\u{f046}',
    arrows = '\u{f047}',
    step_backward = '\u{f048}',
    fast_backward = '\u{f049}',
    backward = '\u{f04a}',
    play = '\u{f04b}',
    pause = '\u{f04c}',
    stop = '\u{f04d}',
    forward = '\u{f04e}',
    fast_forward = '\u{f050}',
    step_forward = '\u{f051}',
    eject = '\u{f052}',
    chevron_left = '\u{f053}',
    chevron_right = '\u{f054}',
    plus_circle = '\u{f055}',
    minus_circle = '\u{f056}',
    times_circle = '\u{f057}',
    check_circle = '\u{f058}',
    question_circle = '\u{f059}',
    info_circle = '\u{f05a}',
    crosshairs = '\u{f05b}',
    times_circle_o = '\u{f05c}',
    check_circle_o = '\u{f05d}',
    ban = '\u{f05e}',
    arrow_left = '\u{f060}',
    arrow_right = '\u{f061}',
    arrow_up = '\u{f062}',
    arrow_down = '\u{f063}',
    share = '\u{f064}',
    expand = '\u{f065}',
    compress = '\u{f066}',
    plus = '\u{f067}',
    minus = '\u{f068}',
    asterisk = '\u{f069}',
    exclamation_circle = '\u{f06a}',
    gift = '\u{f06b}',
    leaf = '\u{f06c}',
    fire = '\u{f06d}',
    eye = '\u{f06e}',
    eye_slash = '\u{f070}',
    exclamation_triangle = '\u{f071}',
    warning = '\u{f071}' => exclamation_triangle,
    plane = '\u{f072}',
    calendar = '\u{f073}',
    random = '\u{f074}',
    comment = '\u{f075}',
    magnet = '\u{f076}',
    chevron_up = '\u{f077}',
    chevron_down = '\u{f078}',
    retweet = '\u{f079}',
    shopping_cart = '\u{f07a}',
    folder = '\u{f07b}',
    folder_open = '\u{f07c}',
    arrows_v = '\u{f07d}',
    arrows_h = '\u{f07e}',
    bar_chart_o = '\u{f080}',
    twitter_square = '\u{f081}',
    facebook_square = '\u{f082}',
    camera_retro = '\u{f083}',
    key = '\u{f084}',
    cogs = '\u{f085}',
    comments = '\u{f086}',
    thumbs_o_up = '\u{f087}',
    thumbs_o_down = '\u{f088}',
    star_half = '\u{f089}',
    heart_o = '\u{f08a}',
    sign_out = '\u{f08b}',
    linkedin_square = '\u{f08c}',
    thumb_tack = '\u{f08d}',
    external_link = '\u{f08e}',
    sign_in = '\u{f090}',
    trophy = '\u{f091}',
    github_square = '\u{f092}',
    upload = '\u{f093}',
    lemon_o = '\u{f094}',
    phone = '\u{f095}',
    square_o = '\u{f096}',
    bookmark_o = '\u{f097}',
    phone_square = '\u{f098}',
    twitter = '\u{f099}',
    facebook = '\u{f09a}',
    github = '\u{f09b}',
    unlock = '\u{f09c}',
    credit_card = '\u{f09d}',
    rss = '\u{f09e}',
    hdd_o = '\u{f0a0}',
    bullhorn = '\u{f0a1}',
    bell = '\u{f0f3}',
    certificate = '\u{f0a3}',
    hand_o_right = '\u{f0a4}',
    hand_o_left = '\u{f0a5}',
    hand_o_up = '\u{f0a6}',
    hand_o_down = '\u{f0a7}',
    arrow_circle_left = '\u{f0a8}',
    arrow_circle_right = '\u{f0a9}',
    arrow_circle_up = '\u{f0aa}',
    arrow_circle_down = '\u{f0ab}',
    globe = '\u{f0ac}',
    wrench = '\u{f0ad}',
    tasks = '\u{f0ae}',
    filter = '\u{f0b0}',
    briefcase = '\u{f0b1}',
    arrows_alt = '\u{f0b2}',
    users = '\u{f0c0}',
    group = '\u{f0c0}' => users,
    link = '\u{f0c1}',
    chain = '\u{f0c1}' => link,
    cloud = '\u{f0c2}',
    flask = '\u{f0c3}',
    scissors = '\u{f0c4}',
    cut = '\u{f0c4}' => scissors,
    files_o = '\u{f0c5}',
    copy = '\u{f0c5}' => files_o,
    paperclip = '\u{f0c6}',
    floppy_o = '\u{f0c7}',
    save = '\u{f0c7}' => floppy_o,
    square = '\u{f0c8}',
    bars = '\u{f0c9}',
    list_ul = '\u{f0ca}',
    list_ol = '\u{f0cb}',
    strikethrough = '\u{f0cc}',
    underline = '\u{f0cd}',
    table = '\u{f0ce}',
    magic = '\u{f0d0}',
    truck = '\u{f0d1}',
    pinterest = '\u{f0d2}',
    pinterest_square = '\u{f0d3}',
    google_plus_square = '\u{f0d4}',
    google_plus = '\u{f0d5}',
    money = '\u{f0d6}',
    caret_down = '\u{f0d7}',
    caret_up = '\u{f0d8}',
    caret_left = '\u{f0d9}',
    caret_right = '\u{f0da}',
    columns = '\u{f0db}',
    sort = '\u{f0dc}',
    unsorted = '\u{f0dc}' => sort,
    // 4.1 swapped the sort-asc and sort-desc glyphs.
    sort_asc = '\u{f0de}',
    sort_up = '\u{f0de}' => sort_asc,
    sort_desc = '\u{f0dd}',
    sort_down = '\u{f0dd}' => sort_desc,
    envelope = '\u{f0e0}',
    linkedin = '\u{f0e1}',
    undo = '\u{f0e2}',
    rotate_left = '\u{f0e2}' => undo,
    gavel = '\u{f0e3}',
    legal = '\u{f0e3}' => gavel,
    tachometer = '\u{f0e4}',
    dashboard = '\u{f0e4}' => tachometer,
    comment_o = '\u{f0e5}',
    comments_o = '\u{f0e6}',
    bolt = '\u{f0e7}',
    flash = '\u{f0e7}' => bolt,
    sitemap = '\u{f0e8}',
    umbrella = '\u{f0e9}',
    clipboard = '\u{f0ea}',
    paste = '\u{f0ea}' => clipboard,
    lightbulb_o = '\u{f0eb}',
    exchange = '\u{f0ec}',
    cloud_download = '\u{f0ed}',
    cloud_upload = '\u{f0ee}',
    user_md = '\u{f0f0}',
    stethoscope = '\u{f0f1}',
    suitcase = '\u{f0f2}',
    bell_o = '\u{f0a2}',
    coffee = '\u{f0f4}',
    cutlery = '\u{f0f5}',
    file_text_o = '\u{f0f6}',
    building_o = '\u{f0f7}',
    hospital_o = '\u{f0f8}',
    ambulance = '\u{f0f9}',
    medkit = '\u{f0fa}',
    fighter_jet = '\u{f0fb}',
    beer = '\u{f0fc}',
    h_square = '\u{f0fd}',
    plus_square = '\u{f0fe}',
    angle_double_left = '\u{f100}',
    angle_double_right = '\u{f101}',
    angle_double_up = '\u{f102}',
    angle_double_down = '\u{f103}',
    angle_left = '\u{f104}',
    angle_right = '\u{f105}',
    angle_up = '\u{f106}',
    angle_down = '\u{f107}',
    desktop = '\u{f108}',
    laptop = '\u{f109}',
    tablet = '\u{f10a}',
    mobile = '\u{f10b}',
    mobile_phone = '\u{f10b}' => mobile,
    circle_o = '\u{f10c}',
    quote_left = '\u{f10d}',
    quote_right = '\u{f10e}',
    spinner = '\u{f110}',
    circle = '\u{f111}',
    reply = '\u{f112}',
    mail_reply = '\u{f112}' => reply,
    github_alt = '\u{f113}',
    folder_o = '\u{f114}',
    folder_open_o = '\u{f115}',
    smile_o = '\u{f118}',
    frown_o = '\u{f119}',
    meh_o = '\u{f11a}',
    gamepad = '\u{f11b}',
    keyboard_o = '\u{f11c}',
    flag_o = '\u{f11d}',
    flag_checkered = '\u{f11e}',
    terminal = '\u{f120}',
    code = '\u{f121}',
    reply_all = '\u{f122}',
    mail_reply_all = '\u{f122}' => reply_all,
    star_half_o = '\u{f123}',
    star_half_empty = '\u{f123}' => star_half_o,
    star_half_full = '\u{f123}' => star_half_o,
    location_arrow = '\u{f124}',
    crop = '\u{f125}',
    code_fork = '\u{f126}',
    chain_broken = '\u{f127}',
    unlink = '\u{f127}' => chain_broken,
    question = '\u{f128}',
    info = '\u{f129}',
    exclamation = '\u{f12a}',
    superscript = '\u{f12b}',
    subscript = '\u{f12c}',
    eraser = '\u{f12d}',
    puzzle_piece = '\u{f12e}',
    microphone = '\u{f130}',
    microphone_slash = '\u{f131}',
    shield = '\u{f132}',
    calendar_o = '\u{f133}',
    fire_extinguisher = '\u{f134}',
    rocket = '\u{f135}',
    maxcdn = '\u{f136}',
    chevron_circle_left = '\u{f137}',
    chevron_circle_right = '\u{f138}',
    chevron_circle_up = '\u{f139}',
    chevron_circle_down = '\u{f13a}',
    html5 = '\u{f13b}',
    css3 = '\u{f13c}',
    anchor = '\u{f13d}',
    unlock_alt = '\u{f13e}',
    bullseye = '\u{f140}',
    ellipsis_h = '\u{f141}',
    ellipsis_v = '\u{f142}',
    rss_square = '\u{f143}',
    play_circle = '\u{f144}',
    ticket = '\u{f145}',
    minus_square = '\u{f146}',
    minus_square_o = '\u{f147}',
    level_up = '\u{f148}',
    level_down = '\u{f149}',
    check_square = '\u{f14a}',
    pencil_square = '\u{f14b}',
    external_link_square = '\u{f14c}',
    share_square = '\u{f14d}',
    compass = '\u{f14e}',
    caret_square_o_down = '\u{f150}',
    toggle_down = '\u{f150}' => caret_square_o_down,
    caret_square_o_up = '\u{f151}',
    toggle_up = '\u{f151}' => caret_square_o_up,
    caret_square_o_right = '\u{f152}',
    toggle_right = '\u{f152}' => caret_square_o_right,
    eur = '\u{f153}',
    euro = '\u{f153}' => eur,
    gbp = '\u{f154}',
    usd = '\u{f155}',
    dollar = '\u{f155}' => usd,
    inr = '\u{f156}',
    rupee = '\u{f156}' => inr,
    jpy = '\u{f157}',
    cny = '\u{f157}' => jpy,
    rmb = '\u{f157}' => jpy,
    yen = '\u{f157}' => jpy,
    rub = '\u{f158}',
    ruble = '\u{f158}' => rub,
    rouble = '\u{f158}' => rub,
    krw = '\u{f159}',
    won = '\u{f159}' => krw,
    btc = '\u{f15a}',
    bitcoin = '\u{f15a}' => btc,
    file = '\u{f15b}',
    file_text = '\u{f15c}',
    sort_alpha_asc = '\u{f15d}',
    sort_alpha_desc = '\u{f15e}',
    sort_amount_asc = '\u{f160}',
    sort_amount_desc = '\u{f161}',
    sort_numeric_asc = '\u{f162}',
    sort_numeric_desc = '\u{f163}',
    thumbs_up = '\u{f164}',
    thumbs_down = '\u{f165}',
    youtube_square = '\u{f166}',
    youtube = '\u{f167}',
    xing = '\u{f168}',
    xing_square = '\u{f169}',
    youtube_play = '\u{f16a}',
    dropbox = '\u{f16b}',
    stack_overflow = '\u{f16c}',
    instagram = '\u{f16d}',
    flickr = '\u{f16e}',
    adn = '\u{f170}',
    bitbucket = '\u{f171}',
    bitbucket_square = '\u{f172}',
    tumblr = '\u{f173}',
    tumblr_square = '\u{f174}',
    long_arrow_down = '\u{f175}',
    long_arrow_up = '\u{f176}',
    long_arrow_left = '\u{f177}',
    long_arrow_right = '\u{f178}',
    apple = '\u{f179}',
    windows = '\u{f17a}',
    android = '\u{f17b}',
    linux = '\u{f17c}',
    dribbble = '\u{f17d}',
    skype = '\u{f17e}',
    foursquare = '\u{f180}',
    trello = '\u{f181}',
    female = '\u{f182}',
    male = '\u{f183}',
    gittip = '\u{f184}',
    sun_o = '\u{f185}',
    moon_o = '\u{f186}',
    archive = '\u{f187}',
    bug = '\u{f188}',
    vk = '\u{f189}',
    weibo = '\u{f18a}',
    renren = '\u{f18b}',
    pagelines = '\u{f18c}',
    stack_exchange = '\u{f18d}',
    arrow_circle_o_right = '\u{f18e}',
    arrow_circle_o_left = '\u{f190}',
    caret_square_o_left = '\u{f191}',
    toggle_left = '\u{f191}' => caret_square_o_left,
    dot_circle_o = '\u{f192}',
    wheelchair = '\u{f193}',
    vimeo_square = '\u{f194}',
    try_ = '\u{f195}',
    turkish_lira = '\u{f195}' => try_,
}
